use crate::{Model, ViewSet};
use serde::{Deserialize, Serialize};

/// A named model graph plus the views defined over it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    model: Model,
    #[serde(default)]
    views: ViewSet,
}

impl Workspace {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = Some(description.to_string());
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut Model {
        &mut self.model
    }

    pub fn views(&self) -> &ViewSet {
        &self.views
    }

    pub fn views_mut(&mut self) -> &mut ViewSet {
        &mut self.views
    }
}
