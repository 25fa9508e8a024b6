use crate::{Error, Result};
use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// The kinds of view a workspace can define, in their fixed export order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewKind {
    Custom,
    SystemLandscape,
    SystemContext,
    Container,
    Component,
    Dynamic,
    Deployment,
}

/// One reveal step of an animated view: the elements that become visible at
/// `order`. Visibility is cumulative across steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animation {
    pub order: u32,
    pub elements: FxHashSet<String>,
}

/// A named, immutable selection over the model graph for rendering purposes.
///
/// Element and relationship inclusion preserve insertion order; for dynamic
/// views the relationship order *is* the interaction sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct View {
    key: String,
    #[serde(default)]
    title: Option<String>,
    kind: ViewKind,
    /// The element this view is scoped to: the software system of a container
    /// view, the container of a component view, the focal element of a
    /// dynamic view.
    #[serde(default)]
    scope: Option<String>,
    #[serde(default)]
    elements: IndexSet<String>,
    #[serde(default)]
    relationships: IndexSet<String>,
    #[serde(default = "default_true")]
    enterprise_boundary_visible: bool,
    #[serde(default)]
    external_boundaries_visible: bool,
    #[serde(default)]
    animations: Vec<Animation>,
    #[serde(default)]
    properties: IndexMap<String, String>,
}

fn default_true() -> bool {
    true
}

impl View {
    pub fn new(key: &str, kind: ViewKind) -> Self {
        Self {
            key: key.to_string(),
            title: None,
            kind,
            scope: None,
            elements: IndexSet::new(),
            relationships: IndexSet::new(),
            enterprise_boundary_visible: true,
            external_boundaries_visible: false,
            animations: Vec::new(),
            properties: IndexMap::new(),
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_scope(mut self, element_id: &str) -> Self {
        self.scope = Some(element_id.to_string());
        self
    }

    /// Shows or hides the enterprise boundary (landscape and context views).
    pub fn with_enterprise_boundary(mut self, visible: bool) -> Self {
        self.enterprise_boundary_visible = visible;
        self
    }

    /// Shows or hides boundaries for elements outside this view's own scope
    /// (container, component and dynamic views).
    pub fn with_external_boundaries(mut self, visible: bool) -> Self {
        self.external_boundaries_visible = visible;
        self
    }

    pub fn add_element(&mut self, id: &str) {
        self.elements.insert(id.to_string());
    }

    pub fn add_relationship(&mut self, id: &str) {
        self.relationships.insert(id.to_string());
    }

    /// Appends an animation step revealing the given elements. Steps are
    /// numbered from 1 in the order they are added, which keeps step indices
    /// monotonic by construction.
    pub fn add_animation(&mut self, element_ids: &[&str]) {
        let order = self.animations.len() as u32 + 1;
        self.animations.push(Animation {
            order,
            elements: element_ids.iter().map(|id| id.to_string()).collect(),
        });
    }

    pub fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// Included element ids, in insertion order.
    pub fn elements(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().map(String::as_str)
    }

    pub fn includes_element(&self, id: &str) -> bool {
        self.elements.contains(id)
    }

    /// Included relationship ids, in insertion order.
    pub fn relationships(&self) -> impl Iterator<Item = &str> {
        self.relationships.iter().map(String::as_str)
    }

    pub fn includes_relationship(&self, id: &str) -> bool {
        self.relationships.contains(id)
    }

    pub fn enterprise_boundary_visible(&self) -> bool {
        self.enterprise_boundary_visible
    }

    pub fn external_boundaries_visible(&self) -> bool {
        self.external_boundaries_visible
    }

    pub fn animations(&self) -> &[Animation] {
        &self.animations
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }
}

/// Configuration shared by every view in a [`ViewSet`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    #[serde(default)]
    properties: IndexMap<String, String>,
}

impl Configuration {
    pub fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }
}

/// All views defined by a workspace, bucketed by kind in definition order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSet {
    #[serde(default)]
    custom: Vec<View>,
    #[serde(default)]
    system_landscape: Vec<View>,
    #[serde(default)]
    system_context: Vec<View>,
    #[serde(default)]
    container: Vec<View>,
    #[serde(default)]
    component: Vec<View>,
    #[serde(default)]
    dynamic: Vec<View>,
    #[serde(default)]
    deployment: Vec<View>,
    #[serde(default)]
    configuration: Configuration,
}

impl ViewSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a view to its kind's bucket. View keys must be unique across the
    /// whole set.
    pub fn add(&mut self, view: View) -> Result<()> {
        if self.all().any(|existing| existing.key() == view.key()) {
            return Err(Error::DuplicateViewKey {
                key: view.key().to_string(),
            });
        }
        let bucket = match view.kind() {
            ViewKind::Custom => &mut self.custom,
            ViewKind::SystemLandscape => &mut self.system_landscape,
            ViewKind::SystemContext => &mut self.system_context,
            ViewKind::Container => &mut self.container,
            ViewKind::Component => &mut self.component,
            ViewKind::Dynamic => &mut self.dynamic,
            ViewKind::Deployment => &mut self.deployment,
        };
        bucket.push(view);
        Ok(())
    }

    pub fn custom_views(&self) -> &[View] {
        &self.custom
    }

    pub fn system_landscape_views(&self) -> &[View] {
        &self.system_landscape
    }

    pub fn system_context_views(&self) -> &[View] {
        &self.system_context
    }

    pub fn container_views(&self) -> &[View] {
        &self.container
    }

    pub fn component_views(&self) -> &[View] {
        &self.component
    }

    pub fn dynamic_views(&self) -> &[View] {
        &self.dynamic
    }

    pub fn deployment_views(&self) -> &[View] {
        &self.deployment
    }

    fn all(&self) -> impl Iterator<Item = &View> {
        self.custom
            .iter()
            .chain(&self.system_landscape)
            .chain(&self.system_context)
            .chain(&self.container)
            .chain(&self.component)
            .chain(&self.dynamic)
            .chain(&self.deployment)
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn configuration_mut(&mut self) -> &mut Configuration {
        &mut self.configuration
    }
}
