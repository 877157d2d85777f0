//! Domain layer - Core roll logic with no external dependencies
//!
//! This layer contains:
//! - Value Objects: rarity grades, attribute tables, stats and ranks
//! - Entities: the assembled Character
//! - Domain Services: randomness sources, attribute roller, stat engine,
//!   seed codec

pub mod entities;
pub mod services;
pub mod value_objects;
