use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeIntent {
    /// Visitor pressed the like button.
    Like,
    /// The acknowledgment window of the latest like elapsed.
    AcknowledgmentExpired,
}

impl Intent for LikeIntent {}
