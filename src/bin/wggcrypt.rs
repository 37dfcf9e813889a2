//! Wggcrypt CLI - pack Lua scripts into `.wgg` artifacts
//!
//! Command-line interface for the fixed-key AES-256-CBC transform. Every
//! input file is encrypted independently and written under its derived
//! `.wgg` name, next to the input or into a chosen output directory.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use wggcrypt::file_ops;
use wggcrypt::naming;

#[derive(Parser)]
#[command(name = "wggcrypt")]
#[command(version)]
#[command(about = "Pack Lua scripts into .wgg artifacts.", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt one or more files into .wgg artifacts
    #[command(alias = "e")]
    Encrypt {
        /// Files to encrypt; each output name is the input name with a
        /// trailing .lua replaced by .wgg
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Directory to write artifacts to (default: next to each input)
        #[arg(short = 'd', long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Encrypt { inputs, out_dir } => {
            file_ops::encrypt_batch(&inputs, out_dir.as_deref())
        }
    };

    match result {
        Ok(artifacts) => {
            for artifact in artifacts {
                println!(
                    "{} ({})",
                    artifact.path.display(),
                    naming::format_bytes(artifact.len)
                );
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}
