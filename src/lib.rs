//! Calculator web API: the uniform JSON error layer and the Axum host around it.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
