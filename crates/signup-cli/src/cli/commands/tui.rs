//! Interactive signup screen.

use anyhow::{Context, Result};
use signup_core::Role;
use signup_core::config::Config;

pub async fn run(config: &Config, role: Option<Role>) -> Result<()> {
    signup_tui::run_signup(config, role)
        .await
        .context("signup screen failed")
}
