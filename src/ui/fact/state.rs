use crate::fact_source::FactError;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FactStatus {
    /// Constructed, nothing requested yet.
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Coarse cause of a failed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactFailureKind {
    Network,
    Timeout,
    Status(u16),
    Malformed,
}

/// Comparable, cloneable description of a fetch failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactFailure {
    pub kind: FactFailureKind,
    pub message: String,
}

impl From<&FactError> for FactFailure {
    fn from(err: &FactError) -> Self {
        let kind = match err {
            FactError::Client(_) | FactError::Network { .. } | FactError::Panicked { .. } => {
                FactFailureKind::Network
            }
            FactError::Timeout { .. } => FactFailureKind::Timeout,
            FactError::Status { status } => FactFailureKind::Status(*status),
            FactError::Malformed { .. } => FactFailureKind::Malformed,
        };
        Self {
            kind,
            message: err.to_string(),
        }
    }
}

/// Snapshot of the fact panel.
///
/// `error` is set only while `Failed`. `text` is the last fact that loaded
/// successfully and survives later `Loading` and `Failed` states.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FactState {
    pub status: FactStatus,
    pub text: Option<String>,
    pub error: Option<FactFailure>,
}

impl UiState for FactState {}

impl FactState {
    pub fn is_loading(&self) -> bool {
        self.status == FactStatus::Loading
    }

    pub fn is_failed(&self) -> bool {
        self.status == FactStatus::Failed
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.message.as_str())
    }
}
