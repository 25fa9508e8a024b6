use crate::{Error, View, ViewKind, ViewSet};

#[test]
fn element_inclusion_preserves_insertion_order_and_deduplicates() {
    let mut view = View::new("context", ViewKind::SystemContext);
    view.add_element("3");
    view.add_element("1");
    view.add_element("3");
    view.add_element("2");

    let ids: Vec<&str> = view.elements().collect();
    assert_eq!(ids, vec!["3", "1", "2"]);
    assert!(view.includes_element("1"));
    assert!(!view.includes_element("4"));
}

#[test]
fn animations_are_numbered_from_one_in_insertion_order() {
    let mut view = View::new("containers", ViewKind::Container);
    view.add_animation(&["1", "2"]);
    view.add_animation(&["3"]);

    let orders: Vec<u32> = view.animations().iter().map(|a| a.order).collect();
    assert_eq!(orders, vec![1, 2]);
    assert!(view.animations()[0].elements.contains("2"));
}

#[test]
fn boundary_flags_default_to_enterprise_on_external_off() {
    let view = View::new("landscape", ViewKind::SystemLandscape);
    assert!(view.enterprise_boundary_visible());
    assert!(!view.external_boundaries_visible());
}

#[test]
fn view_set_buckets_by_kind_and_rejects_duplicate_keys() {
    let mut views = ViewSet::new();
    views.add(View::new("a", ViewKind::SystemContext)).unwrap();
    views.add(View::new("b", ViewKind::Deployment)).unwrap();

    assert_eq!(views.system_context_views().len(), 1);
    assert_eq!(views.deployment_views().len(), 1);
    assert!(views.container_views().is_empty());

    let err = views.add(View::new("a", ViewKind::Dynamic)).unwrap_err();
    assert!(matches!(err, Error::DuplicateViewKey { .. }));
}

#[test]
fn view_properties_shadow_nothing_at_this_level() {
    let mut views = ViewSet::new();
    views
        .configuration_mut()
        .set_property("plantuml.shadowing", "false");

    let mut view = View::new("context", ViewKind::SystemContext);
    view.set_property("plantuml.shadowing", "true");

    assert_eq!(view.property("plantuml.shadowing"), Some("true"));
    assert_eq!(
        views.configuration().property("plantuml.shadowing"),
        Some("false")
    );
    assert_eq!(view.property("missing"), None);
}
