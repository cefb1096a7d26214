//! Pure domain logic for reglens.
//!
//! This crate is IO-free: it ranks findings for display and tracks which
//! result sections have been revealed. Nothing here touches the network,
//! the filesystem, or the clock.

#![forbid(unsafe_code)]

pub mod rank;
pub mod reveal;

#[cfg(test)]
mod proptest;

pub use rank::rank_findings;
pub use reveal::{REVEAL_THRESHOLD, RevealSchedule, SectionKey, section_keys};
