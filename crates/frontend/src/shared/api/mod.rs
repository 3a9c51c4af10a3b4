//! API utilities for frontend-backend communication

pub mod entity_service;

pub use entity_service::{EntityService, PageResponse, RestEntityService};

use thiserror::Error;

/// Failure of one backend call. Controllers catch every variant at their
/// boundary and forward it to the alert collaborator; nothing propagates
/// to view code.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never reached the server, or the connection dropped.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    /// The response body could not be decoded into the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server. Empty (relative URLs)
/// outside a browser.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path starting with "/api/".
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
