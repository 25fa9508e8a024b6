use crate::order;
use archmap_core::{Element, Relationship, View, ViewKind, Workspace};

#[test]
fn elements_sort_ascending_by_id() {
    let c = Element::custom("c", "First");
    let a = Element::custom("a", "Third");
    let b = Element::custom("b", "Second");

    let sorted = order::by_id(vec![&c, &a, &b]);
    let ids: Vec<&str> = sorted.iter().map(|e| e.id()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn deployment_scopes_sort_ascending_by_name() {
    let z = Element::deployment_node("1", "Zeta");
    let a = Element::deployment_node("2", "Alpha");

    let sorted = order::by_name(vec![&z, &a]);
    let names: Vec<&str> = sorted.iter().map(|e| e.name()).collect();
    assert_eq!(names, vec!["Alpha", "Zeta"]);
}

fn relationship_workspace(kind: ViewKind) -> (Workspace, View) {
    let mut workspace = Workspace::new("Acme");
    let model = workspace.model_mut();
    model.add_element(Element::software_system("a", "A")).unwrap();
    model.add_element(Element::software_system("b", "B")).unwrap();
    model
        .add_relationship(Relationship::new("r2", "a", "b"))
        .unwrap();
    model
        .add_relationship(Relationship::new("r1", "b", "a"))
        .unwrap();

    let mut view = View::new("v", kind);
    view.add_relationship("r2");
    view.add_relationship("r1");
    (workspace, view)
}

#[test]
fn relationships_sort_by_id_outside_dynamic_views() {
    let (workspace, view) = relationship_workspace(ViewKind::SystemContext);
    let ids: Vec<&str> = order::relationships(&view, workspace.model())
        .iter()
        .map(|r| r.id())
        .collect();
    assert_eq!(ids, vec!["r1", "r2"]);
}

#[test]
fn dynamic_views_keep_their_interaction_sequence() {
    let (workspace, view) = relationship_workspace(ViewKind::Dynamic);
    let ids: Vec<&str> = order::relationships(&view, workspace.model())
        .iter()
        .map(|r| r.id())
        .collect();
    assert_eq!(ids, vec!["r2", "r1"]);
}
