//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into store-level operations.
//! - Keep shell/UI callers decoupled from storage details.

pub mod list_service;
