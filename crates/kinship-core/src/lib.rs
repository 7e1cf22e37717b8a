//! Kinship Core - Genealogy record parser and relationship engine
//!
//! This crate reads line-oriented, level-tagged genealogy records into a
//! [`Registry`] of persons and families and answers relationship queries
//! (descendants, ancestors, cousins) over it.

pub mod chart;
pub mod error;
pub mod event;
pub mod family;
pub mod limits;
pub mod parser;
pub mod person;
pub mod reader;
pub mod registry;
pub mod relationship;

#[cfg(test)]
mod testing;

pub use chart::{ordinal_suffix, AncestorLine};
pub use error::{Error, Result};
pub use event::Event;
pub use family::{Family, SpouseRef, SpouseRole};
pub use limits::ValidationError;
pub use parser::{parse_file, parse_reader, parse_str, ParseOutcome, ParseStats, RecordIssue};
pub use person::Person;
pub use reader::{Line, LineCursor};
pub use registry::Registry;
pub use relationship::RelationshipEngine;
