//! Frame check calculator.
//!
//! Takes a hex payload and prints its CRC-32 under every convention and
//! engine, its internet checksum, and optionally its dibit stream or the
//! checksums of every prefix.

use std::{env, process::ExitCode};

use fcs::{Convention, Engine};
use packet::{dibit, hex, inet};

#[derive(Clone, Debug, Default)]
struct Args {
  payload: Option<String>,
  prefixes: bool,
  dibits: bool,
}

fn parse_args<I: IntoIterator<Item = String>>(argv: I) -> Result<Args, String> {
  let mut args = Args::default();
  let mut options_done = false;
  for arg in argv {
    if !options_done {
      match arg.as_str() {
        "--" => {
          // End of options: everything after is payload, verbatim.
          options_done = true;
          continue;
        }
        "--prefixes" => {
          args.prefixes = true;
          continue;
        }
        "--dibits" => {
          args.dibits = true;
          continue;
        }
        "--help" | "-h" => {
          print_help();
          return Err(String::new());
        }
        other if other.starts_with("--") => return Err(format!("Unknown arg: {other}")),
        _ => {}
      }
    }
    let mut payload = args.payload.unwrap_or_default();
    if !payload.is_empty() {
      payload.push(' ');
    }
    payload.push_str(&arg);
    args.payload = Some(payload);
  }
  Ok(args)
}

fn print_help() {
  eprintln!(
    "\
fcs-calc: CRC-32 and internet checksum calculator

USAGE:
  cargo run -p packet --bin fcs-calc -- [OPTIONS] <hex bytes>

OPTIONS:
  --prefixes              Also print wire CRC and checksum for every prefix
  --dibits                Also print the payload as a dibit symbol stream

EXAMPLE:
  fcs-calc 'de ad be ef'
"
  );
}

fn main() -> ExitCode {
  let args = match parse_args(env::args().skip(1)) {
    Ok(args) => args,
    Err(msg) => {
      if msg.is_empty() {
        return ExitCode::SUCCESS;
      }
      eprintln!("{msg}");
      return ExitCode::FAILURE;
    }
  };

  let Some(payload) = args.payload else {
    print_help();
    return ExitCode::FAILURE;
  };

  let data = match hex::parse(&payload) {
    Ok(data) => data,
    Err(err) => {
      eprintln!("fcs-calc: {err}");
      return ExitCode::FAILURE;
    }
  };

  println!("payload ({} bytes): {}", data.len(), hex::format(&data));
  println!();

  println!("CRC-32 (engines: serial / parallel / reference)");
  for convention in Convention::ALL {
    print!("  {:28}", convention.name());
    for engine in Engine::ALL {
      print!(" 0x{:08X}", convention.compute(engine, &data));
    }
    println!();
  }
  println!();

  println!("internet checksum: 0x{:04X}", inet::checksum(&data));

  if args.prefixes {
    println!();
    println!("prefixes (wire CRC-32, internet checksum):");
    for len in 0..=data.len() {
      let prefix = &data[..len];
      let wire = Convention::BytewiseBitReverseInvert.compute(Engine::Parallel, prefix);
      println!("  {len:4} bytes: 0x{wire:08X}  0x{:04X}", inet::checksum(prefix));
    }
  }

  if args.dibits {
    println!();
    let symbols = dibit::split_bytes(&data);
    let rendered: Vec<String> = symbols.iter().map(|s| s.to_string()).collect();
    println!("dibits (LSB pair first): {}", rendered.join(" "));
  }

  ExitCode::SUCCESS
}
