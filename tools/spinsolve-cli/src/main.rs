//! spinsolve - Spinsolve data directory tool
//!
//! Inspects, converts and synthesizes Spinsolve directories
//! (acqu.par / protocol.par / data.1d)

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "spinsolve")]
#[command(about = "Spinsolve NMR data directory tool")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a data directory
    Info {
        /// Directory (or any file inside it)
        path: PathBuf,

        /// Binary file is big-endian
        #[arg(long)]
        big_endian: bool,
    },

    /// Print merged parameters
    Params {
        /// Directory (or any file inside it)
        path: PathBuf,

        /// Print as JSON instead of .par text
        #[arg(long)]
        json: bool,
    },

    /// Read a directory and write it elsewhere
    Convert {
        /// Source directory
        input: PathBuf,

        /// Destination directory
        output: PathBuf,

        /// Source binary is big-endian
        #[arg(long)]
        big_endian_in: bool,

        /// Write the binary big-endian
        #[arg(long)]
        big_endian_out: bool,

        /// Replace existing files
        #[arg(long)]
        overwrite: bool,
    },

    /// Write a synthetic single-tone FID
    Synth {
        /// Destination directory
        output: PathBuf,

        /// Number of complex points
        #[arg(short, long, default_value_t = 1024)]
        points: u32,

        /// Dwell time in milliseconds
        #[arg(short, long, default_value_t = 0.2)]
        dwell_ms: f64,

        /// Tone offset in Hz
        #[arg(short, long, default_value_t = 250.0)]
        freq_hz: f64,

        /// T2 decay constant in milliseconds
        #[arg(long, default_value_t = 100.0)]
        t2_ms: f64,

        /// Spectrometer frequency in MHz
        #[arg(long, default_value_t = 43.5)]
        b1_mhz: f64,

        /// Write the binary big-endian
        #[arg(long)]
        big_endian: bool,

        /// Replace existing files
        #[arg(long)]
        overwrite: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging (stderr, stdout carries command output)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Info { path, big_endian } => {
            commands::info(&path, big_endian)?;
        }

        Commands::Params { path, json } => {
            commands::params(&path, json)?;
        }

        Commands::Convert {
            input,
            output,
            big_endian_in,
            big_endian_out,
            overwrite,
        } => {
            tracing::info!("Converting {:?} -> {:?}", input, output);
            commands::convert(&input, &output, big_endian_in, big_endian_out, overwrite)?;
            tracing::info!("Done!");
        }

        Commands::Synth {
            output,
            points,
            dwell_ms,
            freq_hz,
            t2_ms,
            b1_mhz,
            big_endian,
            overwrite,
        } => {
            let tone = commands::Tone {
                points,
                dwell_ms,
                freq_hz,
                t2_ms,
                b1_mhz,
            };
            tracing::info!("Synthesizing {} points -> {:?}", points, output);
            commands::synth(&output, &tone, big_endian, overwrite)?;
            tracing::info!("Done!");
        }
    }

    Ok(())
}
