mod order;

use crate::{DiagramRenderer, IndentingWriter, Legend, ViewContext};
use archmap_core::{Element, Relationship, View, ViewKind, Workspace};

/// Minimal line-oriented renderer driving the exporter in tests. Boundaries
/// open a brace and indent; visibility-gated output is suppressed entirely.
#[derive(Debug, Default)]
pub(crate) struct OutlineRenderer {
    pub(crate) animation: bool,
    pub(crate) legend: bool,
}

impl OutlineRenderer {
    pub(crate) fn animated() -> Self {
        Self {
            animation: true,
            legend: false,
        }
    }
}

impl DiagramRenderer for OutlineRenderer {
    fn write_header(&self, ctx: &ViewContext<'_>, writer: &mut IndentingWriter) {
        writer.write_line(&format!("diagram {} {{", ctx.view().key()));
        writer.indent();
    }

    fn write_footer(&self, _ctx: &ViewContext<'_>, writer: &mut IndentingWriter) {
        writer.outdent();
        writer.write_line("}");
    }

    fn start_enterprise_boundary(
        &self,
        _ctx: &ViewContext<'_>,
        name: &str,
        writer: &mut IndentingWriter,
    ) {
        writer.write_line(&format!("enterprise {name} {{"));
        writer.indent();
    }

    fn end_enterprise_boundary(&self, _ctx: &ViewContext<'_>, writer: &mut IndentingWriter) {
        writer.outdent();
        writer.write_line("}");
    }

    fn start_group_boundary(
        &self,
        _ctx: &ViewContext<'_>,
        group: &str,
        writer: &mut IndentingWriter,
    ) {
        writer.write_line(&format!("group {group} {{"));
        writer.indent();
    }

    fn end_group_boundary(&self, _ctx: &ViewContext<'_>, writer: &mut IndentingWriter) {
        writer.outdent();
        writer.write_line("}");
    }

    fn start_software_system_boundary(
        &self,
        _ctx: &ViewContext<'_>,
        software_system: &Element,
        writer: &mut IndentingWriter,
    ) {
        writer.write_line(&format!("system {} {{", software_system.name()));
        writer.indent();
    }

    fn end_software_system_boundary(&self, _ctx: &ViewContext<'_>, writer: &mut IndentingWriter) {
        writer.outdent();
        writer.write_line("}");
    }

    fn start_container_boundary(
        &self,
        _ctx: &ViewContext<'_>,
        container: &Element,
        writer: &mut IndentingWriter,
    ) {
        writer.write_line(&format!("container {} {{", container.name()));
        writer.indent();
    }

    fn end_container_boundary(&self, _ctx: &ViewContext<'_>, writer: &mut IndentingWriter) {
        writer.outdent();
        writer.write_line("}");
    }

    fn start_deployment_node_boundary(
        &self,
        _ctx: &ViewContext<'_>,
        node: &Element,
        writer: &mut IndentingWriter,
    ) {
        writer.write_line(&format!("node {} {{", node.name()));
        writer.indent();
    }

    fn end_deployment_node_boundary(&self, _ctx: &ViewContext<'_>, writer: &mut IndentingWriter) {
        writer.outdent();
        writer.write_line("}");
    }

    fn write_element(
        &self,
        ctx: &ViewContext<'_>,
        element: &Element,
        writer: &mut IndentingWriter,
    ) {
        if !ctx.is_element_visible(element) {
            return;
        }
        writer.write_line(&format!("element {} {}", element.id(), element.name()));
    }

    fn write_relationship(
        &self,
        ctx: &ViewContext<'_>,
        relationship: &Relationship,
        writer: &mut IndentingWriter,
    ) {
        if !ctx.is_relationship_visible(relationship) {
            return;
        }
        writer.write_line(&format!(
            "rel {} {} -> {}",
            relationship.id(),
            relationship.source_id(),
            relationship.destination_id()
        ));
    }

    fn supports_animation(&self, _ctx: &ViewContext<'_>) -> bool {
        self.animation
    }

    fn legend(&self, _ctx: &ViewContext<'_>) -> Option<Legend> {
        self.legend.then(|| Legend::new("legend"))
    }
}

/// Two software systems, each owning one included container, viewed from
/// system "1" with external boundaries off.
pub(crate) fn container_view_workspace() -> Workspace {
    let mut workspace = Workspace::new("Big Bank");
    let model = workspace.model_mut();
    model
        .add_element(Element::software_system("1", "A"))
        .unwrap();
    model
        .add_element(Element::software_system("2", "B"))
        .unwrap();
    model
        .add_element(Element::container("3", "A API", "1"))
        .unwrap();
    model
        .add_element(Element::container("4", "B API", "2"))
        .unwrap();

    let mut view = View::new("containers", ViewKind::Container).with_scope("1");
    view.add_element("3");
    view.add_element("4");
    workspace.views_mut().add(view).unwrap();
    workspace
}
