//! Outbound ports - Interfaces that the application requires from external systems

mod narrative_port;
mod storage_port;

pub use narrative_port::{
    NarrativeError, NarrativePort, NarrativeRequest, PartialNarrative, PartialSkillSet,
};
pub use storage_port::KeyValueStorePort;
