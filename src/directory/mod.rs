//! User records and the per-field filter applied to them.
//!
//! A [`FilterSet`] always carries one pattern per [`FilterField`]. A record is
//! visible when every pattern is a case-insensitive substring of the matching
//! record field. Empty patterns impose no constraint.

mod filter;
mod record;

pub use filter::{FilterField, FilterSet, UnknownFilterField};
pub use record::Record;
