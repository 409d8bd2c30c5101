pub mod api;
pub mod components;
pub mod date_utils;
pub mod export;
pub mod format;
pub mod icons;
pub mod list_controller;
pub mod list_query;
pub mod modal;
