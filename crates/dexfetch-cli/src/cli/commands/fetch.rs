//! `dexfetch fetch [pokemon]` – fetch, print, save sprites.

use anyhow::{Context, Result};
use dexfetch_core::config::DexfetchConfig;
use dexfetch_core::fetch;
use dexfetch_core::report::format_report;
use dexfetch_core::sprites::{self, SpriteError, SpriteOutcome};
use std::path::PathBuf;

/// Command-line overrides for `fetch`.
#[derive(Debug, Default)]
pub struct FetchArgs {
    pub pokemon: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub no_sprites: bool,
    pub base_url: Option<String>,
}

/// Settings after merging CLI overrides over config.
#[derive(Debug, PartialEq)]
pub(crate) struct FetchPlan {
    pub url: String,
    /// `None` when sprites are disabled.
    pub sprite_dir: Option<PathBuf>,
}

pub(crate) fn plan(cfg: &DexfetchConfig, args: &FetchArgs) -> Result<FetchPlan> {
    let base = args.base_url.as_deref().unwrap_or(&cfg.api_base_url);
    let key = args.pokemon.as_deref().unwrap_or(&cfg.default_pokemon);
    let url = fetch::resource_url(base, key)?;

    let sprite_dir = if args.no_sprites || !cfg.download_sprites {
        None
    } else {
        Some(
            args.output_dir
                .clone()
                .or_else(|| cfg.output_dir.clone())
                .unwrap_or_else(|| PathBuf::from(".")),
        )
    };
    Ok(FetchPlan { url, sprite_dir })
}

pub async fn run_fetch(cfg: &DexfetchConfig, args: FetchArgs) -> Result<()> {
    let plan = plan(cfg, &args)?;
    let pokemon = fetch::fetch_pokemon(&plan.url, cfg.http_options())
        .await
        .with_context(|| format!("fetch {}", plan.url))?;

    print!("{}", format_report(&pokemon));

    let Some(dir) = plan.sprite_dir else {
        tracing::debug!("sprite download disabled");
        return Ok(());
    };
    for outcome in sprites::save_sprites(&pokemon, &dir, cfg.http_options()).await {
        print_outcome(&outcome);
    }
    Ok(())
}

/// Console line for one sprite: `Ok` goes to stdout, `Err` to stderr.
fn outcome_line(outcome: &SpriteOutcome) -> Result<String, String> {
    let side = outcome.side.as_str();
    match &outcome.result {
        Ok(path) => Ok(format!(
            "{} sprite saved as: {}",
            outcome.side.label(),
            path.display()
        )),
        Err(SpriteError::Download(e)) => Err(format!("Error downloading {} sprite: {}", side, e)),
        Err(SpriteError::Save(e)) => Err(format!("Error saving {} sprite: {}", side, e)),
    }
}

fn print_outcome(outcome: &SpriteOutcome) {
    match outcome_line(outcome) {
        Ok(line) => println!("{}", line),
        Err(line) => {
            tracing::warn!(side = outcome.side.as_str(), "{}", line);
            eprintln!("{}", line);
        }
    }
}
