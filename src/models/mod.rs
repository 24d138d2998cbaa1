//! Models loaded from outside the request flow.

pub mod config;
