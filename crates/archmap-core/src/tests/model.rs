use crate::{Element, Error, Location, Model, Relationship};

#[test]
fn add_element_rejects_duplicate_ids() {
    let mut model = Model::new();
    model
        .add_element(Element::software_system("1", "Billing"))
        .unwrap();

    let err = model
        .add_element(Element::person("1", "Customer"))
        .unwrap_err();
    assert_eq!(err.to_string(), "the element id [1] is already in use");
}

#[test]
fn add_element_rejects_unknown_parents() {
    let mut model = Model::new();
    let err = model
        .add_element(Element::container("2", "API", "missing"))
        .unwrap_err();
    assert!(matches!(err, Error::UnknownElement { .. }));
}

#[test]
fn deployment_children_register_in_declaration_order() {
    let mut model = Model::new();
    model
        .add_element(Element::deployment_node("aws", "Amazon Web Services"))
        .unwrap();
    model
        .add_element(Element::deployment_node("ec2", "EC2").child_of("aws"))
        .unwrap();
    model
        .add_element(Element::infrastructure_node("lb", "Load Balancer", "aws"))
        .unwrap();
    model
        .add_element(Element::software_system("sys", "Billing"))
        .unwrap();
    model
        .add_element(Element::software_system_instance("sys-1", "Billing", "ec2"))
        .unwrap();

    let aws = model.element("aws").unwrap().deployment_children().unwrap();
    assert_eq!(aws.deployment_nodes, vec!["ec2".to_string()]);
    assert_eq!(aws.infrastructure_nodes, vec!["lb".to_string()]);

    let ec2 = model.element("ec2").unwrap().deployment_children().unwrap();
    assert_eq!(ec2.software_system_instances, vec!["sys-1".to_string()]);
}

#[test]
fn instances_require_a_deployment_node_parent() {
    let mut model = Model::new();
    model
        .add_element(Element::software_system("sys", "Billing"))
        .unwrap();

    let err = model
        .add_element(Element::container_instance("c-1", "API", "sys"))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "the element [c-1]'s parent [sys] is not a deployment node"
    );
}

#[test]
fn add_relationship_requires_resolvable_endpoints() {
    let mut model = Model::new();
    model
        .add_element(Element::software_system("a", "A"))
        .unwrap();

    let err = model
        .add_relationship(Relationship::new("r1", "a", "b"))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "the element [r1] references an unknown element [b]"
    );

    model
        .add_element(Element::software_system("b", "B"))
        .unwrap();
    model
        .add_relationship(Relationship::new("r1", "a", "b"))
        .unwrap();
    let err = model
        .add_relationship(Relationship::new("r1", "b", "a"))
        .unwrap_err();
    assert!(matches!(err, Error::DuplicateRelationshipId { .. }));
}

#[test]
fn location_only_applies_to_people_and_software_systems() {
    let person = Element::person("p", "User").with_location(Location::Internal);
    assert_eq!(person.location(), Some(Location::Internal));

    let custom = Element::custom("c", "Ledger").with_location(Location::Internal);
    assert_eq!(custom.location(), None);

    // External is the default for locatable kinds.
    assert_eq!(
        Element::software_system("s", "Billing").location(),
        Some(Location::External)
    );
}

#[test]
fn model_round_trips_through_json() {
    let mut model = Model::new();
    model.set_enterprise("Acme");
    model
        .add_element(
            Element::software_system("1", "Billing")
                .with_location(Location::Internal)
                .with_group("Finance"),
        )
        .unwrap();
    model.add_element(Element::container("2", "API", "1")).unwrap();
    model
        .add_relationship(Relationship::new("r1", "2", "1").with_description("Reads from"))
        .unwrap();

    let json = serde_json::to_string(&model).unwrap();
    let restored: Model = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.enterprise(), Some("Acme"));
    assert_eq!(restored.element("2").unwrap().parent(), Some("1"));
    assert_eq!(
        restored.relationship("r1").unwrap().description(),
        Some("Reads from")
    );
}
