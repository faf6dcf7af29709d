#![deny(warnings)]

#[macro_use]
extern crate actix_web;

pub mod api;
pub mod config;
pub mod controllers;
pub mod database;
pub mod entities;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod requests;
pub mod responses;
pub mod router;
pub mod security;
pub mod services;

// Testing utilities (always available for integration tests)
pub mod testing;

// Re-export commonly used types for convenience
pub use errors::HttpError;
pub use middlewares::v1::auth::Auth;
pub use security::{PasswordHasher, TokenIssuer};
