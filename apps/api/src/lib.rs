//! Mock interview backend: answer confidence scoring, adaptive focus-area selection,
//! and the axum service that generates interviews and records answers.

pub mod answers;
pub mod confidence;
pub mod config;
pub mod db;
pub mod errors;
pub mod focus;
pub mod interview;
pub mod llm_client;
pub mod models;
pub mod routes;
pub mod state;
