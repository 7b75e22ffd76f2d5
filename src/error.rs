//! Bridge errors.

use std::fmt;

/// Errors raised while setting up or addressing a bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeError {
    /// A ring of length zero was requested.
    ZeroCapacity,
    /// The process-wide bridge was already created.
    AlreadyInitialized,
    /// The process-wide bridge has not been created yet.
    NotInitialized,
}

impl BridgeError {
    /// Status code returned across the C boundary.
    pub fn code(self) -> u32 {
        match self {
            BridgeError::AlreadyInitialized => 1,
            BridgeError::ZeroCapacity => 2,
            BridgeError::NotInitialized => 3,
        }
    }
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeError::ZeroCapacity => write!(f, "event queue length must be at least 1"),
            BridgeError::AlreadyInitialized => write!(f, "event bridge already initialized"),
            BridgeError::NotInitialized => write!(f, "event bridge not initialized"),
        }
    }
}

impl std::error::Error for BridgeError {}
