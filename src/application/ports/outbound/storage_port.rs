//! Key-value storage port for persisted roll state
//!
//! Mirrors the browser's named-slot storage: two JSON slots (current
//! character and history). Implementations swallow their own I/O errors;
//! callers treat a missing or unreadable value as empty state.

/// Outbound port for persisted key-value slots.
pub trait KeyValueStorePort: Send + Sync {
    /// Read a slot, `None` when missing or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a slot. Failures are logged by the implementation, never raised.
    fn set(&self, key: &str, value: &str);
}
