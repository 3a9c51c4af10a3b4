//! Explicit dependency bundle handed to every view-model constructor.

use std::rc::Rc;

use super::alert::{AlertSink, ToastAlerts};
use super::i18n::{MessageCatalog, Translator};
use super::navigation::{BrowserNavigator, Navigator};

/// The three collaborators every controller needs. Passed by value into
/// constructors; cloning shares the underlying instances.
#[derive(Clone)]
pub struct AppContext {
    pub alerts: Rc<dyn AlertSink>,
    pub navigator: Rc<dyn Navigator>,
    pub i18n: Rc<dyn Translator>,
}

impl AppContext {
    pub fn new(
        alerts: Rc<dyn AlertSink>,
        navigator: Rc<dyn Navigator>,
        i18n: Rc<dyn Translator>,
    ) -> Self {
        Self {
            alerts,
            navigator,
            i18n,
        }
    }

    /// Production wiring: toast alerts, browser history, English catalog.
    pub fn browser() -> Self {
        let i18n: Rc<dyn Translator> = Rc::new(MessageCatalog::new());
        Self {
            alerts: Rc::new(ToastAlerts::new(i18n.clone())),
            navigator: Rc::new(BrowserNavigator),
            i18n,
        }
    }
}
