//! questview - challenge progress in the terminal
//!
//! Joins a player's completion records against the challenge catalog and
//! builds the menu tree the terminal UI navigates: a stats summary, the list
//! of completed challenges, and a gas report for each on-chain completion.
//!
//! ```ignore
//! let tree = ProgressView::new(&user, &challenges)
//!     .with_style(AnsiStyle)
//!     .build_progress_tree();
//! println!("{}", render::render_tree(&tree));
//! ```

pub mod config;
pub mod domain;
pub mod progress;
pub mod render;

pub use domain::*;
pub use progress::{ProgressSummary, ProgressView};
