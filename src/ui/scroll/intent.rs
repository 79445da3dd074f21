use crate::ui::mvi::Intent;

use super::state::ScrollCurve;

#[derive(Debug, Clone, PartialEq)]
pub enum ScrollIntent {
    Scrolled { position: f32, curve: ScrollCurve },
    SectionVisible { section_id: String },
}

impl Intent for ScrollIntent {}
