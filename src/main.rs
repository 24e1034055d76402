// src/main.rs
use clap::error::ErrorKind;
use clap::Parser;
use env_logger::Env;
use log::{debug, info};
use std::path::PathBuf;
use std::process::ExitCode;
use trx_rs::{parse_offset, HeaderReport, Result, TrxReader};

const USAGE: &str = "\
Usage:   trxparse <firmware_image> [optional offset of TRX header]
Examples:
         trxparse firmware.bin
         trxparse firmware.bin 128
         trxparse firmware.bin 0x80";

/// Print the TRX header of a router firmware image
#[derive(Parser, Debug)]
#[command(name = "trxparse", version)]
struct Args {
    /// Firmware image containing a TRX header
    firmware_image: PathBuf,

    /// Byte offset of the TRX header, decimal or 0x-prefixed hex
    #[arg(allow_hyphen_values = true)]
    offset: Option<String>,
}

fn run(args: &Args) -> Result<()> {
    let offset = match &args.offset {
        Some(text) => parse_offset(text)?,
        None => 0,
    };
    info!("Reading TRX header from {} at offset {:#x}", args.firmware_image.display(), offset);

    let header = TrxReader::open(&args.firmware_image)?.read_header(offset)?;
    print!("{}", HeaderReport::new(&header));
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => err.exit(),
        Err(err) => {
            debug!("Argument error: {}", err);
            println!("{}", USAGE);
            return ExitCode::from(1);
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("Failed: {:?}", err);
            eprintln!("error: {}", err);
            ExitCode::from(2)
        }
    }
}
