//! Application layer - Use cases and outbound ports

pub mod ports;
pub mod services;
