//! Full-screen terminal front end for the signup overlay.

pub mod common;
pub mod effects;
pub mod events;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
pub use runtime::TuiRuntime;
use signup_core::Role;
use signup_core::config::Config;

/// Runs the interactive signup screen until the user quits.
///
/// When `initial_role` is set the overlay opens for that role right away.
///
/// # Errors
/// Fails when stdout is not a terminal or the terminal cannot be set up.
pub async fn run_signup(config: &Config, initial_role: Option<Role>) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The signup screen requires a terminal.\n\
             Use `signup submit --role ...` for non-interactive registration checks."
        );
    }

    let mut runtime = TuiRuntime::new(config)?;
    if let Some(role) = initial_role {
        runtime.open_overlay(role);
    }
    runtime.run()
}
