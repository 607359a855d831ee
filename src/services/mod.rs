//! Business logic services.

pub mod token_service;
