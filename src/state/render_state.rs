//! Which body the screen shows.

use super::ViewState;

/// Visual branch of the screen body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderState {
    Loading,
    Empty,
    Populated,
}

impl RenderState {
    /// Loading wins over any receipts already held.
    pub fn classify(loading: bool, receipt_count: usize) -> Self {
        match (loading, receipt_count) {
            (true, _) => RenderState::Loading,
            (false, 0) => RenderState::Empty,
            (false, _) => RenderState::Populated,
        }
    }
}

pub fn derive_render_state(state: &ViewState) -> RenderState {
    RenderState::classify(state.loading(), state.receipts().len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_without_receipts_is_empty() {
        assert_eq!(derive_render_state(&ViewState::new()), RenderState::Empty);
    }

    #[test]
    fn loading_hides_existing_receipts() {
        assert_eq!(RenderState::classify(true, 3), RenderState::Loading);
        assert_eq!(RenderState::classify(true, 0), RenderState::Loading);
    }

    #[test]
    fn idle_with_receipts_is_populated() {
        assert_eq!(RenderState::classify(false, 1), RenderState::Populated);
    }
}
