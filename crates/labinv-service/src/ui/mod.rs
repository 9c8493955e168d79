//! UI state and navigation between screens.

pub mod navigation;
pub mod screen;

pub use navigation::NavigationService;
pub use screen::{Screen, UiState};
