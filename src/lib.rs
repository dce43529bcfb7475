// src/lib.rs

pub mod config;
pub mod error;
pub mod genai;
pub mod handlers;
pub mod models;
pub mod quiz;
pub mod routes;
pub mod sources;
pub mod state;
pub mod utils;

pub use routes::create_router;
