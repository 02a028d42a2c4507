//! Progress tree builder
//!
//! Joins a user's completion records against the challenge catalog and
//! assembles the menu tree shown by `questview progress`:
//!
//! ```text
//! Progress Menu
//! ├─ Progress Stats
//! └─ Completed Challenges
//!    ├─ <challenge>
//!    │  └─ View Gas Report
//!    │     ├─ <function>: <gas> gas
//!    │     └─ ...
//!    └─ <challenge>
//! ```
//!
//! Building never fails: dangling records are dropped and divisions by zero
//! show up as `NaN`/`Infinity` in the rendered text.

mod builder;
mod format;
mod gas_report;
mod points;
mod style;

pub use builder::{ProgressSummary, ProgressView};
pub use format::{format_percent, format_timestamp, group_thousands, TimeDisplay};
pub use gas_report::build_gas_report_node;
pub use points::{points_for_level, total_points, FALLBACK_POINTS, POINTS_PER_LEVEL};
pub use style::{AnsiStyle, PlainStyle, TextStyle};
