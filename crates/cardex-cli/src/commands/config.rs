//! `cardex config` — show or update persisted settings.

use anyhow::{Context, Result};
use clap::Args;

use crate::config::{default_config_path, load_or_default, save_settings};

/// Arguments for `cardex config`.
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Update a setting, as `key=value`. May be given multiple times.
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,
}

/// Run `cardex config`.
///
/// With no `--set` pairs the current settings are printed.
///
/// # Errors
///
/// Returns an error for an unknown key, an unparseable value, or a failed
/// write of the settings file.
pub fn run_config(args: ConfigArgs) -> Result<()> {
    let path = default_config_path();
    let mut settings = load_or_default(&path);

    if args.set.is_empty() {
        print!("{}", toml::to_string(&settings)?);
        return Ok(());
    }

    for pair in &args.set {
        let (key, value) = pair
            .split_once('=')
            .with_context(|| format!("expected key=value, got '{pair}'"))?;
        settings.set_key(key.trim(), value.trim())?;
    }
    save_settings(&settings, &path)?;
    println!("saved {}", path.display());
    Ok(())
}
