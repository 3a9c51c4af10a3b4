pub mod alert;
pub mod api;
pub mod context;
pub mod date_utils;
pub mod i18n;
pub mod list_controller;
pub mod navigation;
pub mod update_controller;
pub mod validation;
