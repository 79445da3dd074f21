use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryIntent {
    /// Visitor picked an image. Out-of-range indices are ignored.
    Select { index: usize },
    /// Auto-advance period elapsed.
    Advance,
    SetAutoAdvance { enabled: bool },
}

impl Intent for GalleryIntent {}
