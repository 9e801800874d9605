//! `quotedesk-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no I/O, no logging setup).

pub mod entity;
pub mod error;
pub mod id;
pub mod money;

pub use entity::{Entity, find_by_id};
pub use error::{DomainError, DomainResult};
pub use id::ProductId;
