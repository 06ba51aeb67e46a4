pub mod config;
pub mod submit;
pub mod tui;
pub mod validate;
