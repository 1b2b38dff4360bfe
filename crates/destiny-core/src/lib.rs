//! Destiny Matrix derivation engine.
//!
//! This crate provides:
//! - Digit reduction into the Arcana range `1..=22`
//! - The eight-node derivation graph computed from a birth date
//! - A static Arcana description table with value and category fallback
//! - Assembly of the final matrix (named nodes + money/love/karmic channels)
//!
//! Core invariants:
//! - Every value produced by the engine lies in `1..=22`
//! - Nodes are derived in a fixed order; later nodes only consume earlier ones
//! - Assembly is pure: the same date always yields a value-equal matrix
//! - The engine never fails for a caller-validated date
//!
//! ```rust
//! use destiny_core::{BirthDate, DestinyMatrix, NodeId};
//!
//! let matrix = DestinyMatrix::assemble(&BirthDate::new(1990, 5, 15));
//! assert_eq!(matrix.nodes.get(NodeId::SoulCenter).value.get(), 6);
//! assert_eq!(matrix.channels.money.map(|v| v.get()), [5, 11, 6]);
//! ```
//!
#![deny(missing_docs)]

/// Arcana values and digit reduction.
pub mod arcana;
/// Caller-supplied birth dates.
pub mod birth_date;
/// Interpretive categories.
pub mod category;
/// Static Arcana description table.
pub mod descriptions;
/// Error types for core operations.
pub mod errors;
/// Node derivation graph.
pub mod graph;
/// Matrix assembly and result types.
pub mod matrix;

pub use arcana::{reduce, Arcana};
pub use birth_date::BirthDate;
pub use category::Category;
pub use descriptions::{describe, describe_entry, ArcanaEntry};
pub use errors::CoreError;
pub use graph::{ChannelName, Channels, DerivedNodes, NodeId};
pub use matrix::{DestinyMatrix, MatrixNodes, Node};
