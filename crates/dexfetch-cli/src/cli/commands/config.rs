//! `dexfetch config` – show config path and effective values.

use anyhow::Result;
use dexfetch_core::config::{self, DexfetchConfig};

pub fn run_config(cfg: &DexfetchConfig) -> Result<()> {
    let path = config::config_path()?;
    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
