use crate::frame::{self, Frame, ViewContext};
use crate::{order, scope};
use crate::{Diagram, DiagramRenderer, Error, IndentingWriter, Result};
use archmap_core::{Element, Location, View, ViewKind, Workspace};
use tracing::trace;

const DEFAULT_ENTERPRISE_NAME: &str = "Enterprise";

/// Which parent kind a container or component view nests under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BoundaryKind {
    SoftwareSystem,
    Container,
}

/// Walks one workspace view at a time and drives the renderer callbacks in
/// nested order, producing one [`Diagram`] per view.
///
/// The exporter holds no per-export state: the active frame is threaded
/// through [`ViewContext`], so passes are re-entrant and independent views
/// (or frames of one view) can be exported concurrently.
pub struct DiagramExporter<R> {
    renderer: R,
}

impl<R: DiagramRenderer> DiagramExporter<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Exports every view in the workspace, walking kinds in the fixed order
    /// custom, landscape, context, container, component, dynamic, deployment,
    /// and views within a kind in definition order.
    pub fn export(&self, workspace: Option<&Workspace>) -> Result<Vec<Diagram>> {
        let workspace = workspace.ok_or(Error::MissingWorkspace)?;
        let views = workspace.views();

        let buckets = [
            views.custom_views(),
            views.system_landscape_views(),
            views.system_context_views(),
            views.container_views(),
            views.component_views(),
            views.dynamic_views(),
            views.deployment_views(),
        ];

        let mut diagrams = Vec::new();
        for bucket in buckets {
            for view in bucket {
                diagrams.push(self.export_view(workspace, view));
            }
        }
        Ok(diagrams)
    }

    /// Exports a single view: one ungated primary pass, plus one gated pass
    /// per planned frame when the renderer animates this view. The legend, if
    /// the renderer produces one, attaches to the primary diagram.
    pub fn export_view(&self, workspace: &Workspace, view: &View) -> Diagram {
        let mut diagram = self.export_pass(workspace, view, None);

        let ctx = ViewContext::new(workspace, view);
        if self.renderer.supports_animation(&ctx) {
            match view.kind() {
                ViewKind::Dynamic => {
                    for tag in frame::dynamic_order_tags(view, workspace.model()) {
                        diagram
                            .add_frame(self.export_pass(workspace, view, Some(Frame::Order(tag))));
                    }
                }
                _ => {
                    for animation in view.animations() {
                        diagram.add_frame(self.export_pass(
                            workspace,
                            view,
                            Some(Frame::Step(animation.order)),
                        ));
                    }
                }
            }
        }

        if let Some(legend) = self.renderer.legend(&ctx) {
            diagram.set_legend(legend);
        }
        diagram
    }

    fn export_pass(&self, workspace: &Workspace, view: &View, frame: Option<Frame<'_>>) -> Diagram {
        let ctx = ViewContext::with_frame(workspace, view, frame);
        let mut writer = IndentingWriter::new();

        self.renderer.write_header(&ctx, &mut writer);
        match view.kind() {
            ViewKind::Custom => self.write_custom_body(&ctx, &mut writer),
            ViewKind::SystemLandscape | ViewKind::SystemContext => {
                self.write_enterprise_body(&ctx, &mut writer)
            }
            ViewKind::Container => {
                self.write_scoped_body(&ctx, BoundaryKind::SoftwareSystem, &mut writer)
            }
            ViewKind::Component => {
                self.write_scoped_body(&ctx, BoundaryKind::Container, &mut writer)
            }
            ViewKind::Dynamic => self.write_dynamic_body(&ctx, &mut writer),
            ViewKind::Deployment => self.write_deployment_body(&ctx, &mut writer),
        }
        self.renderer.write_footer(&ctx, &mut writer);

        Diagram::new(view, writer.into_string())
    }

    /// Custom views have no structural boundary: one flat, possibly grouped,
    /// scope.
    fn write_custom_body(&self, ctx: &ViewContext<'_>, writer: &mut IndentingWriter) {
        let elements = scope::included_elements(ctx.view(), ctx.model());
        self.write_elements(ctx, elements, writer);

        writer.blank_line();
        self.write_relationships(ctx, writer);
    }

    /// Landscape and context views: internally-located people and software
    /// systems render inside the enterprise boundary, everything else after
    /// it. Without the boundary the whole view is one flat scope.
    fn write_enterprise_body(&self, ctx: &ViewContext<'_>, writer: &mut IndentingWriter) {
        let view = ctx.view();
        let model = ctx.model();
        let elements = scope::included_elements(view, model);

        let show_enterprise_boundary = view.enterprise_boundary_visible()
            && elements
                .iter()
                .any(|element| element.location() == Some(Location::Internal));

        if show_enterprise_boundary {
            let name = model.enterprise().unwrap_or(DEFAULT_ENTERPRISE_NAME);
            self.renderer.start_enterprise_boundary(ctx, name, writer);

            let inside: Vec<&Element> = elements
                .iter()
                .copied()
                .filter(|element| element.location() == Some(Location::Internal))
                .collect();
            self.write_elements(ctx, inside, writer);

            self.renderer.end_enterprise_boundary(ctx, writer);

            let outside: Vec<&Element> = elements
                .iter()
                .copied()
                .filter(|element| {
                    element.location() == Some(Location::External) || element.is_custom()
                })
                .collect();
            self.write_elements(ctx, outside, writer);
        } else {
            self.write_elements(ctx, elements, writer);
        }

        writer.blank_line();
        self.write_relationships(ctx, writer);
    }

    /// Container and component views share one strategy, a nesting level
    /// apart: non-scoped elements first, then one boundary per parent owning
    /// an included child. The boundary wrapper is suppressed for parents
    /// other than the view's own scope unless external boundaries are on.
    fn write_scoped_body(
        &self,
        ctx: &ViewContext<'_>,
        boundary: BoundaryKind,
        writer: &mut IndentingWriter,
    ) {
        let view = ctx.view();
        let model = ctx.model();

        let flat: Vec<&Element> = scope::included_elements(view, model)
            .into_iter()
            .filter(|element| match boundary {
                BoundaryKind::SoftwareSystem => !element.is_container(),
                BoundaryKind::Container => !element.is_component(),
            })
            .collect();
        let flat = order::by_id(flat);
        for &element in &flat {
            self.renderer.write_element(ctx, element, writer);
        }
        if !flat.is_empty() {
            writer.blank_line();
        }

        let parents = match boundary {
            BoundaryKind::SoftwareSystem => scope::boundary_software_systems(view, model),
            BoundaryKind::Container => scope::boundary_containers(view, model),
        };
        for parent in parents {
            let show_boundary =
                view.scope() == Some(parent.id()) || view.external_boundaries_visible();
            if show_boundary {
                self.start_boundary(ctx, boundary, parent, writer);
            }

            let children: Vec<&Element> = scope::included_elements(view, model)
                .into_iter()
                .filter(|element| element.parent() == Some(parent.id()))
                .collect();
            self.write_elements(ctx, children, writer);

            if show_boundary {
                self.end_boundary(ctx, boundary, writer);
            } else {
                writer.blank_line();
            }
        }

        self.write_relationships(ctx, writer);
    }

    fn start_boundary(
        &self,
        ctx: &ViewContext<'_>,
        boundary: BoundaryKind,
        parent: &Element,
        writer: &mut IndentingWriter,
    ) {
        match boundary {
            BoundaryKind::SoftwareSystem => {
                self.renderer.start_software_system_boundary(ctx, parent, writer)
            }
            BoundaryKind::Container => self.renderer.start_container_boundary(ctx, parent, writer),
        }
    }

    fn end_boundary(
        &self,
        ctx: &ViewContext<'_>,
        boundary: BoundaryKind,
        writer: &mut IndentingWriter,
    ) {
        match boundary {
            BoundaryKind::SoftwareSystem => self.renderer.end_software_system_boundary(ctx, writer),
            BoundaryKind::Container => self.renderer.end_container_boundary(ctx, writer),
        }
    }

    /// Dynamic views pick their boundary strategy from the focal element:
    /// none renders flat, a software system nests its direct children, a
    /// container nests its components. Scoped children render ungrouped; the
    /// leftover elements render flat after the boundaries.
    fn write_dynamic_body(&self, ctx: &ViewContext<'_>, writer: &mut IndentingWriter) {
        let view = ctx.view();
        let model = ctx.model();
        let mut elements_written = false;

        match view.scope().and_then(|id| model.element(id)) {
            None => {
                for element in order::by_id(scope::included_elements(view, model)) {
                    self.renderer.write_element(ctx, element, writer);
                    elements_written = true;
                }
            }
            Some(focal) if focal.is_software_system() => {
                for system in scope::boundary_software_systems(view, model) {
                    let show_boundary =
                        system.id() == focal.id() || view.external_boundaries_visible();
                    if show_boundary {
                        self.renderer.start_software_system_boundary(ctx, system, writer);
                    }
                    self.write_scoped_children(ctx, system.id(), writer);
                    if show_boundary {
                        self.renderer.end_software_system_boundary(ctx, writer);
                    } else {
                        writer.blank_line();
                    }
                }
                let remainder: Vec<&Element> = scope::included_elements(view, model)
                    .into_iter()
                    .filter(|element| element.parent().is_none())
                    .collect();
                for element in order::by_id(remainder) {
                    self.renderer.write_element(ctx, element, writer);
                    elements_written = true;
                }
            }
            Some(focal) if focal.is_container() => {
                for container in scope::boundary_containers(view, model) {
                    let show_boundary =
                        container.id() == focal.id() || view.external_boundaries_visible();
                    if show_boundary {
                        self.renderer.start_container_boundary(ctx, container, writer);
                    }
                    self.write_scoped_children(ctx, container.id(), writer);
                    if show_boundary {
                        self.renderer.end_container_boundary(ctx, writer);
                    } else {
                        writer.blank_line();
                    }
                }
                let remainder: Vec<&Element> = scope::included_elements(view, model)
                    .into_iter()
                    .filter(|element| {
                        !element
                            .parent()
                            .and_then(|id| model.element(id))
                            .is_some_and(Element::is_container)
                    })
                    .collect();
                for element in order::by_id(remainder) {
                    self.renderer.write_element(ctx, element, writer);
                    elements_written = true;
                }
            }
            // A focal element of any other kind scopes nothing.
            Some(_) => {}
        }

        if elements_written {
            writer.blank_line();
        }
        self.write_relationships(ctx, writer);
    }

    /// Writes the included direct children of one parent, ungrouped,
    /// ascending by id. Dynamic boundaries render through this.
    fn write_scoped_children(
        &self,
        ctx: &ViewContext<'_>,
        parent_id: &str,
        writer: &mut IndentingWriter,
    ) {
        let children: Vec<&Element> = scope::included_elements(ctx.view(), ctx.model())
            .into_iter()
            .filter(|element| element.parent() == Some(parent_id))
            .collect();
        for element in order::by_id(children) {
            self.renderer.write_element(ctx, element, writer);
        }
    }

    /// Deployment views recurse from every included root deployment node,
    /// roots and nested children alike walking in name order.
    fn write_deployment_body(&self, ctx: &ViewContext<'_>, writer: &mut IndentingWriter) {
        let view = ctx.view();
        let model = ctx.model();

        let roots: Vec<&Element> = scope::included_elements(view, model)
            .into_iter()
            .filter(|element| element.is_deployment_node() && element.parent().is_none())
            .collect();
        for root in order::by_name(roots) {
            self.write_deployment_node(ctx, root, writer);
        }

        self.write_relationships(ctx, writer);
    }

    fn write_deployment_node(
        &self,
        ctx: &ViewContext<'_>,
        node: &Element,
        writer: &mut IndentingWriter,
    ) {
        let Some(children) = node.deployment_children() else {
            return;
        };
        let view = ctx.view();
        let model = ctx.model();

        self.renderer.start_deployment_node_boundary(ctx, node, writer);

        for child in scope::included_children_by_name(view, model, &children.deployment_nodes) {
            self.write_deployment_node(ctx, child, writer);
        }
        for infrastructure_node in
            scope::included_children_by_name(view, model, &children.infrastructure_nodes)
        {
            self.renderer.write_element(ctx, infrastructure_node, writer);
        }
        for instance in
            scope::included_children_by_name(view, model, &children.software_system_instances)
        {
            self.renderer.write_element(ctx, instance, writer);
        }
        for instance in
            scope::included_children_by_name(view, model, &children.container_instances)
        {
            self.renderer.write_element(ctx, instance, writer);
        }

        self.renderer.end_deployment_node_boundary(ctx, writer);
    }

    /// Renders one scope: grouped elements first, group labels ascending,
    /// then ungrouped elements, everything ascending by id.
    fn write_elements(
        &self,
        ctx: &ViewContext<'_>,
        elements: Vec<&Element>,
        writer: &mut IndentingWriter,
    ) {
        let elements = order::by_id(elements);

        for group in scope::group_labels(&elements) {
            self.renderer.start_group_boundary(ctx, group, writer);
            for &element in &elements {
                if element.group() == Some(group) {
                    self.renderer.write_element(ctx, element, writer);
                }
            }
            self.renderer.end_group_boundary(ctx, writer);
        }

        for &element in &elements {
            if element.group().is_none_or(str::is_empty) {
                self.renderer.write_element(ctx, element, writer);
            }
        }
    }

    fn write_relationships(&self, ctx: &ViewContext<'_>, writer: &mut IndentingWriter) {
        for relationship in order::relationships(ctx.view(), ctx.model()) {
            trace!(
                id = relationship.id(),
                source = relationship.source_id(),
                destination = relationship.destination_id(),
                "rendering relationship"
            );
            self.renderer.write_relationship(ctx, relationship, writer);
        }
    }
}
