//! surfmesh CLI — inspect, validate, and edit mesh snapshots.

use clap::{Parser, Subcommand};
use surfmesh_cli::commands;

#[derive(Parser)]
#[command(name = "surfmesh")]
#[command(version, about = "surfmesh — indexed polygon mesh store")]
struct Cli {
    /// Mesh configuration (TOML). Defaults apply when omitted.
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print element counts and attached properties.
    Stats {
        /// Path to mesh snapshot (JSON).
        path: String,
    },

    /// Validate a mesh snapshot or a config file.
    Validate {
        /// Path to mesh (.json) or config (.toml).
        path: String,
    },

    /// Print the 3×N vertex position matrix.
    Positions {
        /// Path to mesh snapshot (JSON).
        path: String,
    },

    /// Offset every vertex position.
    Translate {
        /// Path to mesh snapshot (JSON).
        path: String,

        /// Offset as x,y,z.
        #[arg(short, long, value_delimiter = ',', num_args = 3, allow_negative_numbers = true)]
        by: Vec<f32>,

        /// Output path. Overwrites the input when omitted.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Write a procedural mesh snapshot (grid, tetrahedron, cube).
    Generate {
        /// Which shape to generate.
        #[arg(short, long, default_value = "grid")]
        shape: String,

        /// Output JSON path.
        output: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let config = cli.config.as_deref();

    let result = match cli.command {
        Commands::Stats { path } => commands::stats(&path, config),
        Commands::Validate { path } => commands::validate(&path, config),
        Commands::Positions { path } => commands::positions(&path, config),
        Commands::Translate { path, by, output } => {
            commands::translate(&path, &by, output.as_deref(), config)
        }
        Commands::Generate { shape, output } => commands::generate(&shape, &output),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
