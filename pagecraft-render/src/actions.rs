//! Editing affordances exposed by an edit-mode render pass.

use pagecraft_model::MoveDirection;
use pagecraft_types::ComponentId;
use serde::{Deserialize, Serialize};

/// Which controls are active on an edit-mode block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditControls {
    pub can_edit: bool,
    pub can_delete: bool,
    pub can_move_up: bool,
    pub can_move_down: bool,
}

impl EditControls {
    /// Controls for the record at `index` of a list of `len` records.
    pub(crate) fn at(index: usize, len: usize, editable: bool) -> Self {
        Self {
            can_edit: editable,
            can_delete: true,
            can_move_up: index > 0,
            can_move_down: index + 1 < len,
        }
    }

    pub fn allows(&self, action: &EditAction) -> bool {
        match action {
            EditAction::Edit { .. } => self.can_edit,
            EditAction::Delete { .. } => self.can_delete,
            EditAction::Move { direction: MoveDirection::Up, .. } => self.can_move_up,
            EditAction::Move { direction: MoveDirection::Down, .. } => self.can_move_down,
        }
    }
}

/// A control activated on the builder canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum EditAction {
    Edit { id: ComponentId },
    Delete { id: ComponentId },
    Move { id: ComponentId, direction: MoveDirection },
}

impl EditAction {
    pub fn id(&self) -> ComponentId {
        match self {
            Self::Edit { id } | Self::Delete { id } | Self::Move { id, .. } => *id,
        }
    }
}

/// Receives activated controls. Implemented by whatever owns the page list.
pub trait EditHandler {
    fn on_edit(&mut self, id: ComponentId);
    fn on_delete(&mut self, id: ComponentId);
    fn on_move(&mut self, id: ComponentId, direction: MoveDirection);
}
