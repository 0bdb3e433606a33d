//! rollcalld library root.
//! Exposes the store, configuration, and HTTP router so integration tests
//! can drive the service in-process.

pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod models;
