//! Transient user notifications (toasts).

use std::rc::Rc;

use leptos::prelude::*;

use super::api::ApiError;
use super::i18n::Translator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Info,
    Success,
    Danger,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub variant: ToastVariant,
}

/// Where controllers report user-facing outcomes. One method per outcome
/// class; no method returns an error.
pub trait AlertSink {
    fn http_error(&self, error: &ApiError);
    fn info(&self, message: &str, variant: ToastVariant);
    fn success(&self, message: &str);
}

/// Signal-backed toast queue; the shell renders and expires entries.
#[derive(Clone)]
pub struct ToastAlerts {
    pub toasts: RwSignal<Vec<Toast>>,
    i18n: Rc<dyn Translator>,
}

impl ToastAlerts {
    pub fn new(i18n: Rc<dyn Translator>) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            i18n,
        }
    }

    fn push(&self, message: String, variant: ToastVariant) {
        self.toasts.update(|list| list.push(Toast { message, variant }));
    }
}

impl AlertSink for ToastAlerts {
    fn http_error(&self, error: &ApiError) {
        log::error!("{error}");
        let message = match error {
            ApiError::Network(_) => self.i18n.translate("error.server.not.reachable", &[]),
            ApiError::Status { status: 404, .. } => self.i18n.translate("error.http.404", &[]),
            ApiError::Status { body, .. } if !body.is_empty() => body.clone(),
            other => other.to_string(),
        };
        self.push(message, ToastVariant::Danger);
    }

    fn info(&self, message: &str, variant: ToastVariant) {
        self.push(message.to_string(), variant);
    }

    fn success(&self, message: &str) {
        self.push(message.to_string(), ToastVariant::Success);
    }
}
