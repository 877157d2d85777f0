//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - HTTP: REST API routes serving the browser frontend
//! - LLM: narrative text-generation client
//! - Persistence: key-value stores for the persisted state slots
//! - Config: application configuration
//! - State: shared application state

pub mod config;
pub mod http;
pub mod llm;
pub mod persistence;
pub mod state;
