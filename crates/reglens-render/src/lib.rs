//! Deterministic renderers for the report surfaces (canonical JSON,
//! colorized line view, results summary).

#![forbid(unsafe_code)]

mod canonical;
mod colorize;
mod summary;

pub use canonical::{canonical_json, canonical_line_count};
pub use colorize::{ColorizedLine, LineClass, classify, colorize, colorize_report, render_terminal};
pub use summary::render_summary;
