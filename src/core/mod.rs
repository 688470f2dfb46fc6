// src/core/mod.rs

pub mod alias;
pub mod resolver;
pub mod role_index;
pub mod types;
