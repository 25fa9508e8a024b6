#![forbid(unsafe_code)]

//! Architecture model graph and view definitions.
//!
//! `archmap-core` holds the data half of archmap: a typed element graph
//! ([`Model`]), directed [`Relationship`]s between elements, and named
//! [`View`]s that select a slice of the graph for rendering. The export
//! engine in `archmap-export` consumes these structures read-only.
//!
//! Design goals:
//! - stable identifiers everywhere (element ids are the universal sort key)
//! - insertion order is preserved wherever it is semantically meaningful
//!   (view inclusion order, dynamic interaction sequences)
//! - construction-time validation only; a built [`Workspace`] is assumed
//!   consistent by consumers

pub mod error;
pub mod model;
pub mod view;
pub mod workspace;

pub use error::{Error, Result};
pub use model::{
    DeploymentChildren, Element, ElementKind, Location, Model, Relationship,
};
pub use view::{Animation, Configuration, View, ViewKind, ViewSet};
pub use workspace::Workspace;

#[cfg(test)]
mod tests;
