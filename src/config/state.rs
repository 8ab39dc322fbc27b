// src/config/state.rs
use super::options::ScrapeOptions;

/// Which screen the GUI is showing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    SelectingState,
    /// Detail table for the named state.
    ViewingDetails(String),
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub view: View,

    /// Dropdown choice; `None` is the "Select" placeholder.
    pub selected_state: Option<String>,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            view: View::SelectingState,
            selected_state: None,
            window_w: 1100,
            window_h: 700,
        }
    }
}

impl GuiState {
    /// "View Libraries" is only offered once a real state is picked.
    pub fn can_view(&self) -> bool {
        matches!(self.view, View::SelectingState) && self.selected_state.is_some()
    }

    /// Switch to the detail table. No-op without a selection.
    pub fn view_details(&mut self) -> bool {
        match (&self.view, &self.selected_state) {
            (View::SelectingState, Some(state)) => {
                self.view = View::ViewingDetails(state.clone());
                true
            }
            _ => false,
        }
    }

    /// "Back to State Selection". The dropdown keeps its last choice.
    pub fn back(&mut self) {
        self.view = View::SelectingState;
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: ScrapeOptions,
    pub gui: GuiState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_requires_a_selection() {
        let mut g = GuiState::default();
        assert!(!g.can_view());
        assert!(!g.view_details());
        assert_eq!(g.view, View::SelectingState);

        g.selected_state = Some(s!("Ohio"));
        assert!(g.can_view());
        assert!(g.view_details());
        assert_eq!(g.view, View::ViewingDetails(s!("Ohio")));
        assert!(!g.can_view());
    }

    #[test]
    fn back_returns_to_dropdown_and_keeps_choice() {
        let mut g = GuiState { selected_state: Some(s!("Iowa")), ..GuiState::default() };
        g.view_details();
        g.back();
        assert_eq!(g.view, View::SelectingState);
        assert_eq!(g.selected_state.as_deref(), Some("Iowa"));
    }
}
