// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod router;
pub mod server;
pub use crate::core::resolver::Resolver;
pub use crate::core::types::{ChampionId, Destination, RoleId};
