use archmap_core::{Element, Model, Relationship, View, Workspace};
use indexmap::IndexSet;

/// The active animation step of one export pass.
///
/// Static and deployment views step through their recorded animation orders;
/// dynamic views step through the distinct sequence tags of their
/// relationships. The primary pass of every view runs without a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame<'a> {
    Step(u32),
    Order(&'a str),
}

/// Everything a render callback needs to know about the pass in flight.
///
/// The context is immutable and rebuilt per pass, so exporting several frames
/// of one view (or several views of one workspace) in parallel is safe.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    workspace: &'a Workspace,
    view: &'a View,
    frame: Option<Frame<'a>>,
}

impl<'a> ViewContext<'a> {
    pub fn new(workspace: &'a Workspace, view: &'a View) -> Self {
        Self::with_frame(workspace, view, None)
    }

    pub fn with_frame(workspace: &'a Workspace, view: &'a View, frame: Option<Frame<'a>>) -> Self {
        Self {
            workspace,
            view,
            frame,
        }
    }

    pub fn workspace(&self) -> &'a Workspace {
        self.workspace
    }

    pub fn model(&self) -> &'a Model {
        self.workspace.model()
    }

    pub fn view(&self) -> &'a View {
        self.view
    }

    pub fn frame(&self) -> Option<Frame<'a>> {
        self.frame
    }

    /// Reads a configuration property, falling back from the view to the view
    /// set configuration to the given default.
    pub fn property<'d>(&self, name: &str, default: &'d str) -> &'d str
    where
        'a: 'd,
    {
        self.view
            .property(name)
            .or_else(|| self.workspace.views().configuration().property(name))
            .unwrap_or(default)
    }

    /// Whether the element is revealed in the active frame.
    ///
    /// With no frame everything is visible. In a numbered step, an element is
    /// visible once any animation entry up to that step mentions it (step 0
    /// gates nothing). In a sequence frame, an element is visible while it is
    /// an endpoint of an included relationship carrying the active tag.
    pub fn is_element_visible(&self, element: &Element) -> bool {
        match self.frame {
            None => true,
            Some(Frame::Step(step)) => {
                if step == 0 {
                    return true;
                }
                self.view
                    .animations()
                    .iter()
                    .filter(|animation| animation.order <= step)
                    .any(|animation| animation.elements.contains(element.id()))
            }
            Some(Frame::Order(tag)) => self
                .view
                .relationships()
                .filter_map(|id| self.model().relationship(id))
                .filter(|relationship| relationship.order() == Some(tag))
                .any(|relationship| {
                    relationship.source_id() == element.id()
                        || relationship.destination_id() == element.id()
                }),
        }
    }

    /// Whether the relationship is revealed in the active frame. Only
    /// sequence frames gate relationships; numbered steps never hide them.
    pub fn is_relationship_visible(&self, relationship: &Relationship) -> bool {
        match self.frame {
            Some(Frame::Order(tag)) => relationship.order() == Some(tag),
            _ => true,
        }
    }
}

/// The distinct sequence tags across a dynamic view's included relationships,
/// in first-occurrence order. Untagged relationships plan no frame.
pub fn dynamic_order_tags<'m>(view: &View, model: &'m Model) -> Vec<&'m str> {
    let mut tags: IndexSet<&str> = IndexSet::new();
    for id in view.relationships() {
        if let Some(order) = model.relationship(id).and_then(Relationship::order) {
            tags.insert(order);
        }
    }
    tags.into_iter().collect()
}
