//! Domain services - Pure roll logic with no I/O

pub mod rng;
pub mod roller;
pub mod seed_codec;
pub mod stat_engine;
