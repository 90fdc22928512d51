use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use colored::Colorize;
use env_logger::Builder;
use log::LevelFilter;

use addr_extract::{consts::DEFAULT_INPUT_FILE, extract_addresses, AddressMap};

fn run(file_path: &Path) -> Result<AddressMap> {
    extract_addresses(file_path)
        .with_context(|| format!("Error extracting addresses from {}", file_path.display()))
}

fn main() {
    // RUST_LOG overrides the default level
    Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .format_timestamp(None)
        .init();

    match run(Path::new(DEFAULT_INPUT_FILE)) {
        Ok(addresses) => {
            println!(
                "{}",
                format!("Found {} addresses:", addresses.len())
                    .bright_green()
                    .bold()
            );
            print!("{}", addresses);
        }
        Err(e) => {
            eprintln!("{:#}", e);
            process::exit(1);
        }
    }
}
