use crate::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Whether a person or software system sits inside or outside the enterprise.
///
/// Anything not explicitly marked internal renders outside the enterprise
/// boundary, so [`Location::External`] is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Location {
    Internal,
    #[default]
    External,
}

/// Ordered child collections owned by a deployment node.
///
/// Children are stored as element ids into the owning [`Model`]; the vectors
/// preserve registration order, consumers re-sort by name when rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentChildren {
    pub deployment_nodes: Vec<String>,
    pub infrastructure_nodes: Vec<String>,
    pub software_system_instances: Vec<String>,
    pub container_instances: Vec<String>,
}

/// The closed set of element kinds, with kind-specific payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementKind {
    Person { location: Location },
    SoftwareSystem { location: Location },
    Container,
    Component,
    Custom,
    DeploymentNode(DeploymentChildren),
    InfrastructureNode,
    SoftwareSystemInstance,
    ContainerInstance,
}

/// A node in the architecture model graph.
///
/// `id` is unique within a model and is the tie-break for every "sort by id"
/// ordering. `parent` is a weak back-reference by id, used for scoping only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    id: String,
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    group: Option<String>,
    #[serde(default)]
    parent: Option<String>,
    kind: ElementKind,
}

impl Element {
    fn new(id: &str, name: &str, kind: ElementKind) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            group: None,
            parent: None,
            kind,
        }
    }

    pub fn person(id: &str, name: &str) -> Self {
        Self::new(
            id,
            name,
            ElementKind::Person {
                location: Location::default(),
            },
        )
    }

    pub fn software_system(id: &str, name: &str) -> Self {
        Self::new(
            id,
            name,
            ElementKind::SoftwareSystem {
                location: Location::default(),
            },
        )
    }

    pub fn container(id: &str, name: &str, software_system_id: &str) -> Self {
        let mut element = Self::new(id, name, ElementKind::Container);
        element.parent = Some(software_system_id.to_string());
        element
    }

    pub fn component(id: &str, name: &str, container_id: &str) -> Self {
        let mut element = Self::new(id, name, ElementKind::Component);
        element.parent = Some(container_id.to_string());
        element
    }

    pub fn custom(id: &str, name: &str) -> Self {
        Self::new(id, name, ElementKind::Custom)
    }

    /// A deployment node. Top-level by default; use [`Element::child_of`] to
    /// nest it under another deployment node.
    pub fn deployment_node(id: &str, name: &str) -> Self {
        Self::new(
            id,
            name,
            ElementKind::DeploymentNode(DeploymentChildren::default()),
        )
    }

    pub fn infrastructure_node(id: &str, name: &str, deployment_node_id: &str) -> Self {
        let mut element = Self::new(id, name, ElementKind::InfrastructureNode);
        element.parent = Some(deployment_node_id.to_string());
        element
    }

    pub fn software_system_instance(id: &str, name: &str, deployment_node_id: &str) -> Self {
        let mut element = Self::new(id, name, ElementKind::SoftwareSystemInstance);
        element.parent = Some(deployment_node_id.to_string());
        element
    }

    pub fn container_instance(id: &str, name: &str, deployment_node_id: &str) -> Self {
        let mut element = Self::new(id, name, ElementKind::ContainerInstance);
        element.parent = Some(deployment_node_id.to_string());
        element
    }

    /// Sets the enterprise location. Only people and software systems carry a
    /// location; for every other kind this is a no-op.
    pub fn with_location(mut self, location: Location) -> Self {
        match &mut self.kind {
            ElementKind::Person { location: slot }
            | ElementKind::SoftwareSystem { location: slot } => *slot = location,
            _ => {}
        }
        self
    }

    pub fn with_group(mut self, group: &str) -> Self {
        self.group = Some(group.to_string());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Nests this element under the given parent element id.
    pub fn child_of(mut self, parent_id: &str) -> Self {
        self.parent = Some(parent_id.to_string());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    /// The enterprise location, for people and software systems.
    pub fn location(&self) -> Option<Location> {
        match self.kind {
            ElementKind::Person { location } | ElementKind::SoftwareSystem { location } => {
                Some(location)
            }
            _ => None,
        }
    }

    pub fn is_person(&self) -> bool {
        matches!(self.kind, ElementKind::Person { .. })
    }

    pub fn is_software_system(&self) -> bool {
        matches!(self.kind, ElementKind::SoftwareSystem { .. })
    }

    pub fn is_container(&self) -> bool {
        matches!(self.kind, ElementKind::Container)
    }

    pub fn is_component(&self) -> bool {
        matches!(self.kind, ElementKind::Component)
    }

    pub fn is_custom(&self) -> bool {
        matches!(self.kind, ElementKind::Custom)
    }

    pub fn is_deployment_node(&self) -> bool {
        matches!(self.kind, ElementKind::DeploymentNode(_))
    }

    /// The child id collections, when this element is a deployment node.
    pub fn deployment_children(&self) -> Option<&DeploymentChildren> {
        match &self.kind {
            ElementKind::DeploymentNode(children) => Some(children),
            _ => None,
        }
    }
}

/// A directed edge between two elements.
///
/// The optional `order` tag names the sequence step this interaction belongs
/// to in a dynamic view ("1", "2a", "2b", ...). Several relationships may
/// share a tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    id: String,
    source_id: String,
    destination_id: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    order: Option<String>,
}

impl Relationship {
    pub fn new(id: &str, source_id: &str, destination_id: &str) -> Self {
        Self {
            id: id.to_string(),
            source_id: source_id.to_string(),
            destination_id: destination_id.to_string(),
            description: None,
            order: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_order(mut self, order: &str) -> Self {
        self.order = Some(order.to_string());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    pub fn destination_id(&self) -> &str {
        &self.destination_id
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn order(&self) -> Option<&str> {
        self.order.as_deref()
    }
}

/// The element graph: id-keyed elements and relationships in insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[serde(default)]
    enterprise: Option<String>,
    #[serde(default)]
    elements: IndexMap<String, Element>,
    #[serde(default)]
    relationships: IndexMap<String, Relationship>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names the enterprise this model belongs to. Used as the label of the
    /// enterprise boundary in landscape and context views.
    pub fn set_enterprise(&mut self, name: &str) {
        self.enterprise = Some(name.to_string());
    }

    pub fn enterprise(&self) -> Option<&str> {
        self.enterprise.as_deref()
    }

    /// Adds an element to the graph.
    ///
    /// The id must be unused and any declared parent must already exist.
    /// Deployment nodes, infrastructure nodes and instances additionally
    /// register themselves into their parent deployment node's ordered child
    /// collections.
    pub fn add_element(&mut self, element: Element) -> Result<()> {
        if self.elements.contains_key(&element.id) {
            return Err(Error::DuplicateElementId { id: element.id });
        }

        if let Some(parent_id) = element.parent.clone() {
            if !self.elements.contains_key(&parent_id) {
                return Err(Error::UnknownElement {
                    id: element.id,
                    reference: parent_id,
                });
            }
            self.register_with_deployment_parent(&element, &parent_id)?;
        }

        self.elements.insert(element.id.clone(), element);
        Ok(())
    }

    fn register_with_deployment_parent(&mut self, element: &Element, parent_id: &str) -> Result<()> {
        let slot: fn(&mut DeploymentChildren) -> &mut Vec<String> = match element.kind {
            ElementKind::DeploymentNode(_) => |c| &mut c.deployment_nodes,
            ElementKind::InfrastructureNode => |c| &mut c.infrastructure_nodes,
            ElementKind::SoftwareSystemInstance => |c| &mut c.software_system_instances,
            ElementKind::ContainerInstance => |c| &mut c.container_instances,
            // Containers and components keep a weak parent reference only.
            _ => return Ok(()),
        };

        let Some(parent) = self.elements.get_mut(parent_id) else {
            return Err(Error::UnknownElement {
                id: element.id.clone(),
                reference: parent_id.to_string(),
            });
        };
        match &mut parent.kind {
            ElementKind::DeploymentNode(children) => {
                slot(children).push(element.id.clone());
                Ok(())
            }
            _ => Err(Error::NotADeploymentNode {
                id: element.id.clone(),
                parent: parent_id.to_string(),
            }),
        }
    }

    /// Adds a relationship. Both endpoints must resolve to existing elements.
    pub fn add_relationship(&mut self, relationship: Relationship) -> Result<()> {
        if self.relationships.contains_key(&relationship.id) {
            return Err(Error::DuplicateRelationshipId {
                id: relationship.id,
            });
        }
        for endpoint in [&relationship.source_id, &relationship.destination_id] {
            if !self.elements.contains_key(endpoint) {
                return Err(Error::UnknownElement {
                    id: relationship.id.clone(),
                    reference: endpoint.clone(),
                });
            }
        }
        self.relationships
            .insert(relationship.id.clone(), relationship);
        Ok(())
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }

    pub fn relationship(&self, id: &str) -> Option<&Relationship> {
        self.relationships.get(id)
    }

    pub fn relationships(&self) -> impl Iterator<Item = &Relationship> {
        self.relationships.values()
    }
}
