//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use super::commands;
use brdoc::output::OutputMode;

/// brdoc - Brazilian document numbers
#[derive(Parser, Debug)]
#[command(
    name = "brdoc",
    version,
    about = "Validate, generate and format Brazilian document numbers",
    long_about = "Validate, generate and format Brazilian document numbers.\n\n\
                  Documents: cnh, cpf, cnpj, and the state registration of any UF\n\
                  (ie-sp, ie-mg, ... or just sp, mg)."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check whether values are valid (exits 1 if any is not)
    Validate {
        /// Document kind: cnh, cpf, cnpj, ie-<uf>
        document: String,

        /// Values to check, masked or not
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Generate random valid values
    Generate {
        /// Document kind: cnh, cpf, cnpj, ie-<uf>
        document: String,

        /// How many values to generate
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Print values in masked form
        #[arg(short, long)]
        masked: bool,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Insert separators into a digits-only value
    Mask {
        /// Document kind: cnh, cpf, cnpj, ie-<uf>
        document: String,

        /// Digits-only value
        value: String,
    },

    /// Strip separators from a value
    Unmask {
        /// Document kind: cnh, cpf, cnpj, ie-<uf>
        document: String,

        /// Masked value
        value: String,
    },

    /// List every supported document with its length and mask
    List,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Validate { document, values }) => {
            commands::validate(&document, &values, output_mode)
        },
        Some(Command::Generate {
            document,
            count,
            masked,
            seed,
        }) => commands::generate(&document, count, masked, seed, output_mode),
        Some(Command::Mask { document, value }) => commands::mask(&document, &value, output_mode),
        Some(Command::Unmask { document, value }) => {
            commands::unmask(&document, &value, output_mode)
        },
        Some(Command::List) => commands::list(output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": brdoc::VERSION
                    })
                );
            } else {
                println!("brdoc v{}", brdoc::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "name": "brdoc",
                        "version": brdoc::VERSION
                    })
                );
            } else {
                println!("brdoc v{}", brdoc::VERSION);
                println!("Run 'brdoc --help' for usage");
            }
            Ok(())
        },
    }
}
