//! Temporal facet filtering for the transcript timeline
//!
//! - [`facets`] derives month/week labels from timestamps
//! - [`apply`] holds the stateless matching and option-set functions
//! - [`engine`] keeps filter state and the month-dependent week options consistent

pub mod apply;
pub mod engine;
pub mod facets;
pub mod state;

pub use apply::{filter_entries, month_options, week_options};
pub use engine::TimelineFilterEngine;
pub use facets::{UNKNOWN_FACET, derive_facets, week_index};
pub use state::{ALL_MONTHS, ALL_WEEKS, FilterState};
