//! # Board Core
//!
//! The domain layer of the board application.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod pagination;
pub mod ports;
pub mod service;

pub use error::DomainError;
pub use pagination::Pager;
pub use service::BoardService;
