//! Cross-cutting runtime helpers

pub mod shutdown;
