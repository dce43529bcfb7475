// src/handlers/mod.rs

pub mod auth;
pub mod notes;
pub mod question_sets;
pub mod quiz;
pub mod sources;
