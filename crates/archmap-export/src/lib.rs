#![forbid(unsafe_code)]

//! Hierarchical, renderer-agnostic diagram export.
//!
//! [`DiagramExporter`] walks every view of an `archmap-core` workspace and
//! drives a [`DiagramRenderer`] through structured callbacks: header, nested
//! boundary open/close, element and relationship emission, footer. The
//! traversal decides *what* is visible, *how it nests* and *in what order* it
//! is emitted; the renderer supplies the concrete output syntax.
//!
//! Output is deterministic: within any scope, elements render ascending by id
//! (deployment scopes ascending by name), groups in label order before
//! ungrouped elements, and relationships ascending by id except in dynamic
//! views, whose inclusion order is the interaction sequence itself.

pub mod diagram;
pub mod exporter;
pub mod frame;
pub mod indent;
pub mod order;
pub mod renderer;
pub mod scope;

pub use diagram::{Diagram, Legend};
pub use exporter::DiagramExporter;
pub use frame::{Frame, ViewContext};
pub use indent::IndentingWriter;
pub use renderer::DiagramRenderer;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("a workspace must be provided")]
    MissingWorkspace,
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests;
