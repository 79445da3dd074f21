use crate::ui::mvi::Reducer;

use super::intent::ScrollIntent;
use super::state::ScrollAnimState;

pub struct ScrollReducer;

impl Reducer for ScrollReducer {
    type State = ScrollAnimState;
    type Intent = ScrollIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ScrollIntent::Scrolled { position, curve } => {
                let (parallax_offset, header_opacity) = curve.map(position);
                ScrollAnimState {
                    parallax_offset,
                    header_opacity,
                    ..state
                }
            }
            ScrollIntent::SectionVisible { section_id } => {
                let mut state = state;
                state.section_revealed.insert(section_id);
                state
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::scroll::state::ScrollCurve;

    #[test]
    fn scroll_updates_offset_and_opacity() {
        let state = ScrollReducer::reduce(
            ScrollAnimState::default(),
            ScrollIntent::Scrolled {
                position: 60.0,
                curve: ScrollCurve::default(),
            },
        );
        assert_eq!(state.parallax_offset, 30.0);
        assert!((state.header_opacity - 0.8).abs() < 1e-6);
    }

    #[test]
    fn scroll_keeps_revealed_sections() {
        let state = ScrollReducer::reduce(
            ScrollAnimState::default(),
            ScrollIntent::SectionVisible {
                section_id: "gallery".into(),
            },
        );
        let state = ScrollReducer::reduce(
            state,
            ScrollIntent::Scrolled {
                position: 0.0,
                curve: ScrollCurve::default(),
            },
        );
        assert!(state.is_revealed("gallery"));
    }

    #[test]
    fn revealing_twice_is_idempotent() {
        let once = ScrollReducer::reduce(
            ScrollAnimState::default(),
            ScrollIntent::SectionVisible {
                section_id: "facts".into(),
            },
        );
        let twice = ScrollReducer::reduce(
            once.clone(),
            ScrollIntent::SectionVisible {
                section_id: "facts".into(),
            },
        );
        assert_eq!(once, twice);
    }
}
