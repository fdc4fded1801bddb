#![deny(missing_debug_implementations)]

//! # sdb-entities
//!
//! Reusable, agnostic domain entities for stagedb.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod artist;
pub mod id;
pub mod show;
pub mod time;
pub mod venue;
pub mod url {
    pub use url::{ParseError, Url};
}

#[cfg(any(test, feature = "builders"))]
pub mod builders;
