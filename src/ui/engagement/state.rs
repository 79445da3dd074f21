use crate::ui::mvi::UiState;

/// Like counter plus the "thanks!" flag shown right after a like.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LikeState {
    /// Total likes this session. Never decreases.
    pub count: u64,
    /// True inside the acknowledgment window of the most recent like.
    pub acknowledging: bool,
}

impl UiState for LikeState {}
