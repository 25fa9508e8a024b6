use archmap_core::View;

/// A rendered key/legend payload for one diagram.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Legend {
    definition: String,
}

impl Legend {
    pub fn new(definition: &str) -> Self {
        Self {
            definition: definition.to_string(),
        }
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }
}

/// One exported diagram definition.
///
/// An animated view produces a primary diagram whose `frames` hold one nested
/// diagram per animation or sequence step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram {
    key: String,
    title: Option<String>,
    definition: String,
    legend: Option<Legend>,
    frames: Vec<Diagram>,
}

impl Diagram {
    pub fn new(view: &View, definition: String) -> Self {
        Self {
            key: view.key().to_string(),
            title: view.title().map(str::to_string),
            definition,
            legend: None,
            frames: Vec::new(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn legend(&self) -> Option<&Legend> {
        self.legend.as_ref()
    }

    pub fn frames(&self) -> &[Diagram] {
        &self.frames
    }

    pub fn add_frame(&mut self, frame: Diagram) {
        self.frames.push(frame);
    }

    pub fn set_legend(&mut self, legend: Legend) {
        self.legend = Some(legend);
    }
}
