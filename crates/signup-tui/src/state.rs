//! Application state composition.
//!
//! ```text
//! AppState
//! ├── landing: LandingState   (entry buttons behind the overlay)
//! ├── overlay: SignupOverlay  (controller + animation state)
//! ├── viewport: Rect          (last known terminal size)
//! └── should_quit: bool
//! ```

use ratatui::layout::Rect;
use signup_core::Role;
use signup_core::config::Config;

use crate::overlays::SignupOverlay;

/// The page behind the overlay: two entry buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandingState {
    /// Highlighted entry button.
    pub selected: Role,
}

impl Default for LandingState {
    fn default() -> Self {
        Self {
            selected: Role::Student,
        }
    }
}

impl LandingState {
    pub fn toggle(&mut self) {
        self.selected = self.selected.other();
    }
}

pub struct AppState {
    pub landing: LandingState,
    pub overlay: SignupOverlay,
    pub viewport: Rect,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            landing: LandingState::default(),
            overlay: SignupOverlay::new(config),
            viewport: Rect::default(),
            should_quit: false,
        }
    }
}
