//! An order-independent, incremental multiset hash ("ECMH"), built on a
//! generic curve group interface.
//!
//! Two collections holding the same multiset of byte strings hash to the
//! same 32-byte digest no matter the order in which elements were inserted,
//! and elements can be added or removed incrementally without recomputing
//! over the whole collection.
mod multiset;
pub use crate::multiset::*;
pub mod group;
pub mod hash;
pub use crate::group::ParseError;
