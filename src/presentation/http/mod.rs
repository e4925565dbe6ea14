// src/presentation/http/mod.rs
pub mod classifier;
pub mod error;
pub mod extractors;
pub mod openapi;
pub mod routes;
