use crate::{IndentingWriter, Legend, ViewContext};
use archmap_core::{Element, Relationship};

/// The capability set a concrete output syntax implements.
///
/// The exporter owns the traversal; implementations own the grammar. Every
/// callback receives the [`ViewContext`] of the pass in flight, which carries
/// the visibility predicate for frame-gated output, and the writer for the
/// diagram being produced.
///
/// Boundary callbacks come in open/close pairs and are always balanced.
/// Implementations typically indent on open and outdent on close.
pub trait DiagramRenderer {
    fn write_header(&self, ctx: &ViewContext<'_>, writer: &mut IndentingWriter);
    fn write_footer(&self, ctx: &ViewContext<'_>, writer: &mut IndentingWriter);

    fn start_enterprise_boundary(
        &self,
        ctx: &ViewContext<'_>,
        name: &str,
        writer: &mut IndentingWriter,
    );
    fn end_enterprise_boundary(&self, ctx: &ViewContext<'_>, writer: &mut IndentingWriter);

    fn start_group_boundary(&self, ctx: &ViewContext<'_>, group: &str, writer: &mut IndentingWriter);
    fn end_group_boundary(&self, ctx: &ViewContext<'_>, writer: &mut IndentingWriter);

    fn start_software_system_boundary(
        &self,
        ctx: &ViewContext<'_>,
        software_system: &Element,
        writer: &mut IndentingWriter,
    );
    fn end_software_system_boundary(&self, ctx: &ViewContext<'_>, writer: &mut IndentingWriter);

    fn start_container_boundary(
        &self,
        ctx: &ViewContext<'_>,
        container: &Element,
        writer: &mut IndentingWriter,
    );
    fn end_container_boundary(&self, ctx: &ViewContext<'_>, writer: &mut IndentingWriter);

    fn start_deployment_node_boundary(
        &self,
        ctx: &ViewContext<'_>,
        node: &Element,
        writer: &mut IndentingWriter,
    );
    fn end_deployment_node_boundary(&self, ctx: &ViewContext<'_>, writer: &mut IndentingWriter);

    fn write_element(&self, ctx: &ViewContext<'_>, element: &Element, writer: &mut IndentingWriter);
    fn write_relationship(
        &self,
        ctx: &ViewContext<'_>,
        relationship: &Relationship,
        writer: &mut IndentingWriter,
    );

    /// Whether this renderer can animate the given view. Renderers that only
    /// produce a single static document keep the default.
    fn supports_animation(&self, _ctx: &ViewContext<'_>) -> bool {
        false
    }

    /// An optional legend for the view's primary diagram.
    fn legend(&self, _ctx: &ViewContext<'_>) -> Option<Legend> {
        None
    }
}
