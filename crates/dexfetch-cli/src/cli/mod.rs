//! CLI for dexfetch.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dexfetch_core::config;
use std::path::PathBuf;

use commands::{run_config, run_fetch, FetchArgs};

/// Top-level CLI for dexfetch.
#[derive(Debug, Parser)]
#[command(name = "dexfetch")]
#[command(about = "dexfetch: fetch a Pokémon record, print it, save its sprites", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch a record, print its fields and download its sprites.
    Fetch {
        /// Pokémon id or name (default: `default_pokemon` from config).
        pokemon: Option<String>,

        /// Directory to write sprites to (default: config `output_dir`, else current directory).
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Print the record only; do not download sprites.
        #[arg(long)]
        no_sprites: bool,

        /// Override the API base URL from config.
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
    },

    /// Show the config file path and the effective configuration.
    Config,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch {
                pokemon,
                output_dir,
                no_sprites,
                base_url,
            } => {
                let args = FetchArgs {
                    pokemon,
                    output_dir,
                    no_sprites,
                    base_url,
                };
                run_fetch(&cfg, args).await?;
            }
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
