//! API data transfer objects shared between handlers and their clients.

pub mod api;
pub mod exercise;
