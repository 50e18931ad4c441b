// SPDX-License-Identifier: MIT

use std::path::PathBuf;

use clap::Parser;
use sizehdr::logger;
use sizehdr::version;
use tracing::error;

#[derive(Debug, Parser)]
#[command(name = "sizehdr", version = version::VERSION)]
#[command(about = "Emit a file's byte size as a 4-byte little-endian header on stdout")]
struct Args {
    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// File whose size to emit
    path: PathBuf,
}

fn main() {
    if let Err(err) = _main() {
        error!("{}", err);
        std::process::exit(1);
    }
}

fn _main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose > 1 {
        tracing::Level::TRACE
    } else if args.verbose > 0 {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    logger::init_logger(log_level);
    version::log_version();

    let mut stdout = std::io::stdout().lock();
    sizehdr::emit::emit_size_header(&args.path, &mut stdout)?;
    Ok(())
}
