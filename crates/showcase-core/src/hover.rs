//! Hover tracking and single-mesh emissive highlight.

use crate::model::{Emissive, EmissiveTarget};
use crate::pick::{Hit, MeshId};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverState {
    pub hovered: Option<MeshId>,
    pub is_hovering: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverTransition {
    Started,
    Ended,
}

/// Tracks the hover flag and the one mesh currently lit up.
///
/// The snapshot holds the highlighted mesh's emissive exactly as it was
/// before the highlight, and is written back when the highlight moves or
/// clears. The mesh must stay alive while referenced; the model is never
/// dropped once loaded.
#[derive(Debug, Default)]
pub struct HoverTracker {
    state: HoverState,
    snapshot: Option<(MeshId, Emissive)>,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> HoverState {
        self.state
    }

    pub fn is_hovering(&self) -> bool {
        self.state.is_hovering
    }

    pub fn highlighted(&self) -> Option<MeshId> {
        self.snapshot.map(|(id, _)| id)
    }

    /// Consume this frame's hits (nearest first). Returns a transition only
    /// when the hover flag flips.
    pub fn update(&mut self, hits: &[Hit], target: &mut dyn EmissiveTarget) -> Option<HoverTransition> {
        let top = hits
            .iter()
            .map(|h| h.mesh)
            .find(|m| target.emissive(*m).is_some());
        self.highlight(top, target);

        let was = self.state.is_hovering;
        self.state.is_hovering = !hits.is_empty();
        match (was, self.state.is_hovering) {
            (false, true) => Some(HoverTransition::Started),
            (true, false) => Some(HoverTransition::Ended),
            _ => None,
        }
    }

    /// Move the highlight to `next`, restoring whatever was lit before.
    pub fn highlight(&mut self, next: Option<MeshId>, target: &mut dyn EmissiveTarget) {
        if self.highlighted() == next {
            return;
        }
        if let Some((id, original)) = self.snapshot.take() {
            target.set_emissive(id, original);
        }
        if let Some(id) = next {
            if let Some(original) = target.emissive(id) {
                self.snapshot = Some((id, original));
                target.set_emissive(id, Emissive::highlight());
            }
        }
        self.state.hovered = self.highlighted();
    }

    /// Drop hover and highlight entirely.
    pub fn clear(&mut self, target: &mut dyn EmissiveTarget) -> Option<HoverTransition> {
        self.update(&[], target)
    }
}
