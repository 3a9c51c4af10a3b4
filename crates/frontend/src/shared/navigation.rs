//! Navigation collaborator: the controllers only ever go back.

pub trait Navigator {
    /// Return to the previous view.
    fn back(&self);
}

/// Browser-history implementation.
#[derive(Debug, Default, Clone)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn back(&self) {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.back();
            }
        }
    }
}
