//! Total-order rules applied at every partition boundary independently.

use archmap_core::{Element, Model, Relationship, View, ViewKind};

/// Elements ascending by id, the default order inside any scope.
pub fn by_id(mut elements: Vec<&Element>) -> Vec<&Element> {
    elements.sort_by(|a, b| a.id().cmp(b.id()));
    elements
}

/// Elements ascending by name. Deployment scopes sort this way because
/// deployment nodes are user-facing infrastructure labels.
pub fn by_name(mut elements: Vec<&Element>) -> Vec<&Element> {
    elements.sort_by(|a, b| a.name().cmp(b.name()));
    elements
}

/// A view's included relationships in render order: ascending by id, except
/// dynamic views, whose inclusion order is the interaction sequence and must
/// not be re-sorted.
pub fn relationships<'m>(view: &View, model: &'m Model) -> Vec<&'m Relationship> {
    let mut relationships: Vec<&Relationship> = view
        .relationships()
        .filter_map(|id| model.relationship(id))
        .collect();
    if view.kind() != ViewKind::Dynamic {
        relationships.sort_by(|a, b| a.id().cmp(b.id()));
    }
    relationships
}
