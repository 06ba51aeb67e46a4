//! Config command handlers.

use anyhow::{Context, Result};
use signup_core::config::{self, Config};

pub fn path() {
    println!("{}", config::paths::config_path().display());
}

pub fn init() -> Result<()> {
    let config_path = config::paths::config_path();
    Config::init(&config_path).context("init config")?;
    println!("Created config at {}", config_path.display());
    Ok(())
}
