use std::collections::BTreeSet;

use crate::config::ScrollConfig;
use crate::ui::mvi::UiState;

/// Linear mapping from scroll position to header animation values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollCurve {
    /// Positions are clamped to `[0, domain]`.
    pub domain: f32,
    /// Parallax offset at the end of the domain.
    pub parallax_max: f32,
}

impl Default for ScrollCurve {
    fn default() -> Self {
        Self {
            domain: 300.0,
            parallax_max: 150.0,
        }
    }
}

impl From<&ScrollConfig> for ScrollCurve {
    fn from(config: &ScrollConfig) -> Self {
        Self {
            domain: config.domain,
            parallax_max: config.parallax_max,
        }
    }
}

impl ScrollCurve {
    /// Returns `(parallax_offset, header_opacity)` for a raw position.
    ///
    /// NaN counts as the top of the page. A curve with a degenerate domain
    /// or parallax range pins the header at the top.
    pub fn map(&self, position: f32) -> (f32, f32) {
        if !(self.domain.is_finite() && self.domain > 0.0) || position.is_nan() {
            return (0.0, 1.0);
        }
        let progress = (position.clamp(0.0, self.domain) / self.domain).clamp(0.0, 1.0);
        let offset = progress * self.parallax_max;
        let offset = if offset.is_finite() { offset } else { 0.0 };
        (offset, 1.0 - progress)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollAnimState {
    pub parallax_offset: f32,
    /// 1.0 at the top, fading to 0.0 at the end of the domain.
    pub header_opacity: f32,
    /// Reveal-once: identifiers are added, never removed.
    pub section_revealed: BTreeSet<String>,
}

impl Default for ScrollAnimState {
    fn default() -> Self {
        Self {
            parallax_offset: 0.0,
            header_opacity: 1.0,
            section_revealed: BTreeSet::new(),
        }
    }
}

impl UiState for ScrollAnimState {}

impl ScrollAnimState {
    pub fn is_revealed(&self, section_id: &str) -> bool {
        self.section_revealed.contains(section_id)
    }
}
