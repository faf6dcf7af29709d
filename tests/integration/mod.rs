//! Integration tests for the palisade service

pub mod auth_flow;
pub mod data_flow;
pub mod health_test;
