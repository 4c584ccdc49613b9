// Adapters layer: concrete implementations for the Syoboi API and the local filesystem.

pub mod http;
pub mod storage;
