use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GalleryState {
    /// Fixed for the session and never empty once constructed.
    pub images: Vec<String>,
    pub current_index: usize,
    pub auto_advance_enabled: bool,
}

impl UiState for GalleryState {}

impl GalleryState {
    pub fn current_image(&self) -> Option<&str> {
        self.images.get(self.current_index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
