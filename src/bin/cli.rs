//! btserial CLI
//!
//! Validate, summarize, encode and persist Bluetooth serial action records.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use btserial::bundle::{read_bundle, write_bundle};
use btserial::protocol::write_payload;
use btserial::{Bundle, Config, Record, Result};

/// btserial CLI
#[derive(Parser, Debug)]
#[command(name = "btserial-cli")]
#[command(about = "Validate and encode Bluetooth serial action records")]
#[command(version)]
struct Args {
    /// Fallback log filter when RUST_LOG is not set
    #[arg(long, default_value = "warn,btserial=info")]
    log_filter: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check an address/command pair and print the first problem
    Check {
        /// Device address or %placeholder
        address: String,

        /// Command text
        command: Option<String>,
    },

    /// Print the display summary of a record
    Summary {
        address: String,
        command: String,

        /// Maximum summary length, terminator included
        #[arg(short, long, default_value = "60")]
        max_len: usize,
    },

    /// Write the wire payload of a record to stdout
    Encode {
        address: String,
        command: String,

        /// Print the payload as hex instead of raw bytes
        #[arg(long)]
        hex: bool,
    },

    /// Save a record as a bundle file
    Save {
        address: String,
        command: String,

        /// Bundle file
        #[arg(short, long, default_value = "./btserial_action.bundle")]
        file: PathBuf,
    },

    /// Load a bundle file and print its summary and payload
    Show {
        /// Bundle file
        #[arg(short, long, default_value = "./btserial_action.bundle")]
        file: PathBuf,
    },
}

fn main() {
    let args = Args::parse();

    let mut builder = Config::builder().log_filter(&args.log_filter);
    match &args.command {
        Commands::Summary { max_len, .. } => builder = builder.summary_max_len(*max_len),
        Commands::Save { file, .. } | Commands::Show { file } => builder = builder.bundle_path(file),
        _ => {}
    }
    let config = builder.build();

    // Logs go to stderr so stdout carries only output
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = config.validate() {
        tracing::error!("{}", e);
        process::exit(2);
    }

    tracing::debug!("btserial CLI v{}", btserial::VERSION);

    if let Err(e) = run(args.command, &config) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn run(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Check { address, command } => {
            match btserial::error_for(Some(&address), command.as_deref()) {
                Some(err) => {
                    println!("{}", err);
                    process::exit(1);
                }
                None => {
                    println!("ok");
                    Ok(())
                }
            }
        }

        Commands::Summary { address, command, .. } => {
            let record = Record::try_build(Some(&address), Some(&command))?;
            let summary = record.summary_with_limit(config.summary_max_len);
            println!("{}", summary.trim_end_matches('\r'));
            Ok(())
        }

        Commands::Encode { address, command, hex } => {
            let record = Record::try_build(Some(&address), Some(&command))?;
            if hex {
                println!("{}", to_hex(&record.payload()));
            } else {
                write_payload(&mut std::io::stdout().lock(), &record)?;
            }
            Ok(())
        }

        Commands::Save { address, command, .. } => {
            let record = Record::try_build(Some(&address), Some(&command))?;
            let mut writer = BufWriter::new(File::create(&config.bundle_path)?);
            write_bundle(&mut writer, &Bundle::from(&record))?;
            tracing::info!(path = %config.bundle_path.display(), "Saved bundle");
            Ok(())
        }

        Commands::Show { .. } => {
            let mut reader = BufReader::new(File::open(&config.bundle_path)?);
            let bundle = read_bundle(&mut reader)?;
            let record = Record::try_from(&bundle)?;
            println!("{}", record.summary().trim_end_matches('\r'));
            println!("{}", to_hex(&record.payload()));
            Ok(())
        }
    }
}

fn to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
