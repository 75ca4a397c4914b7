//! matrixd CLI - serve the matrix API or run operations on local files
//!
//! # Main Command
//!
//! ```bash
//! matrixd serve                  # Start HTTP server (port 3000)
//! ```
//!
//! # Debug Commands (for development)
//!
//! ```bash
//! matrixd echo matrix.csv        # Print the matrix back
//! matrixd invert matrix.csv      # Print the transpose
//! matrixd flatten matrix.csv     # Print all cells on one line
//! matrixd sum matrix.csv         # Print the sum of all cells
//! matrixd multiply matrix.csv    # Print the product of all cells
//! ```

use clap::{Parser, Subcommand};
use matrixd::{parse_file, Operation};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "matrixd")]
#[command(about = "CSV matrix operations over HTTP", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP server
    Serve {
        /// Port to listen on (falls back to MATRIXD_PORT, then 3000)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print a CSV matrix back in normalized form
    Echo {
        /// Input CSV file
        input: PathBuf,
    },

    /// Print the transpose of a CSV matrix
    Invert {
        /// Input CSV file
        input: PathBuf,
    },

    /// Print all cells of a CSV matrix on one line, row-major
    Flatten {
        /// Input CSV file
        input: PathBuf,
    },

    /// Print the sum of all cells of a CSV matrix
    Sum {
        /// Input CSV file
        input: PathBuf,
    },

    /// Print the product of all cells of a CSV matrix
    Multiply {
        /// Input CSV file
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { port } => cmd_serve(port).await,
        Commands::Echo { input } => cmd_operation(Operation::Echo, &input),
        Commands::Invert { input } => cmd_operation(Operation::Invert, &input),
        Commands::Flatten { input } => cmd_operation(Operation::Flatten, &input),
        Commands::Sum { input } => cmd_operation(Operation::Sum, &input),
        Commands::Multiply { input } => cmd_operation(Operation::Multiply, &input),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_serve(port: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let port = port.or_else(port_from_env).unwrap_or(3000);
    matrixd::server::start_server(port).await
}

fn cmd_operation(op: Operation, input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 {}: {}", op.name(), input.display());

    let matrix = parse_file(input)?;
    eprintln!("   Parsed {}x{} matrix", matrix.height(), matrix.width());

    println!("{}", op.apply(&matrix));
    Ok(())
}

fn port_from_env() -> Option<u16> {
    std::env::var("MATRIXD_PORT").ok()?.parse().ok()
}
