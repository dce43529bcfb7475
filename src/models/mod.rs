// src/models/mod.rs

pub mod note;
pub mod question_set;
pub mod quiz;
pub mod user;
