//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository and seed-catalog access into use-case APIs.
//! - Keep UI layers decoupled from storage and ranking details.

pub mod post_service;
