use crate::ui::mvi::Intent;

use super::state::FactFailure;

#[derive(Debug, Clone, PartialEq)]
pub enum FactIntent {
    /// A fetch was started.
    Request,
    /// The fetch returned a fact.
    Succeeded { text: String },
    /// The fetch failed.
    Failed { failure: FactFailure },
}

impl Intent for FactIntent {}
