mod text;
mod timers;

pub use text::{mask_secret, pop_grapheme, truncate_start_with_ellipsis, truncate_with_ellipsis};
pub use timers::TimerTable;
