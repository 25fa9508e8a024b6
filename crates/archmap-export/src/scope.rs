//! Partitioning of a view's elements into the nested scopes the output
//! expresses.

use crate::order;
use archmap_core::{Element, Model, View};
use rustc_hash::FxHashSet;

/// Resolves the view's included element ids against the model, in inclusion
/// order. Ids the model cannot resolve are skipped.
pub fn included_elements<'m>(view: &View, model: &'m Model) -> Vec<&'m Element> {
    view.elements().filter_map(|id| model.element(id)).collect()
}

/// The software systems owning at least one included container, ascending by
/// id. These are the boundary keys of a container view.
pub fn boundary_software_systems<'m>(view: &View, model: &'m Model) -> Vec<&'m Element> {
    boundary_parents(view, model, Element::is_container)
}

/// The containers owning at least one included component, ascending by id.
/// These are the boundary keys of a component view.
pub fn boundary_containers<'m>(view: &View, model: &'m Model) -> Vec<&'m Element> {
    boundary_parents(view, model, Element::is_component)
}

/// Projects included children back to their parents and de-duplicates.
/// Children with no resolvable parent contribute nothing; they fall through
/// to flat rendering instead. Discovery order is irrelevant because the
/// result is re-sorted by id.
fn boundary_parents<'m>(
    view: &View,
    model: &'m Model,
    is_scoped: fn(&Element) -> bool,
) -> Vec<&'m Element> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut parents: Vec<&Element> = Vec::new();
    for element in included_elements(view, model) {
        if !is_scoped(element) {
            continue;
        }
        let Some(parent) = element.parent().and_then(|id| model.element(id)) else {
            continue;
        };
        if seen.insert(parent.id()) {
            parents.push(parent);
        }
    }
    order::by_id(parents)
}

/// The distinct non-empty group labels in one scope, ascending. Grouped
/// elements render entirely before ungrouped elements in the same scope.
pub fn group_labels<'m>(elements: &[&'m Element]) -> Vec<&'m str> {
    let mut labels: Vec<&str> = Vec::new();
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    for element in elements {
        let Some(group) = element.group().filter(|g| !g.is_empty()) else {
            continue;
        };
        if seen.insert(group) {
            labels.push(group);
        }
    }
    labels.sort_unstable();
    labels
}

/// The subset of `ids` that are included in the view, resolved and sorted by
/// name. Deployment node child collections render through this.
pub fn included_children_by_name<'m>(
    view: &View,
    model: &'m Model,
    ids: &[String],
) -> Vec<&'m Element> {
    let children: Vec<&Element> = ids
        .iter()
        .filter_map(|id| model.element(id))
        .filter(|child| view.includes_element(child.id()))
        .collect();
    order::by_name(children)
}
