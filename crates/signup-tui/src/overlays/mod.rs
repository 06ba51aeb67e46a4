//! Overlay modules for the TUI.
//!
//! Overlays are modal UI components that take over keyboard input while
//! open. Each one owns its state, key handler and render function.
//!
//! - `signup.rs`: student/teacher registration overlay
//! - `render_utils.rs`: shared rendering helpers for overlays

pub mod render_utils;
pub mod signup;

pub use signup::{SignupOverlay, overlay_area};
