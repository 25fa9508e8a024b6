#![forbid(unsafe_code)]

//! `archmap` turns an architecture model and its views into textual diagram
//! definitions.
//!
//! The crate is a facade over two workspace members:
//! - `archmap-core`: the typed element graph, relationships, views and
//!   workspace container
//! - `archmap-export`: the renderer-agnostic export engine (re-exported here
//!   under [`export`])
//!
//! The exporter decides what is visible, how it nests and in what order it is
//! emitted; a [`export::DiagramRenderer`] implementation supplies the output
//! grammar.
//!
//! # Example
//!
//! ```
//! use archmap::{Element, Relationship, View, ViewKind, Workspace};
//!
//! let mut workspace = Workspace::new("Internet Banking");
//! let model = workspace.model_mut();
//! model.add_element(Element::person("user", "Customer"))?;
//! model.add_element(Element::software_system("bank", "Internet Banking System"))?;
//! model.add_relationship(Relationship::new("r1", "user", "bank").with_description("Uses"))?;
//!
//! let mut view = View::new("context", ViewKind::SystemContext).with_scope("bank");
//! view.add_element("user");
//! view.add_element("bank");
//! view.add_relationship("r1");
//! workspace.views_mut().add(view)?;
//!
//! // A DiagramRenderer implementation supplies the concrete syntax:
//! // let diagrams = export::DiagramExporter::new(renderer).export(Some(&workspace))?;
//! # Ok::<(), archmap::Error>(())
//! ```

pub use archmap_core::*;

pub mod export {
    pub use archmap_export::{
        Diagram, DiagramExporter, DiagramRenderer, Error, Frame, IndentingWriter, Legend, Result,
        ViewContext, frame, order, scope,
    };
}
