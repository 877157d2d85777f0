//! Narrative generation helpers: prompt construction and the local fallback

pub mod fallback;
pub mod prompt;
