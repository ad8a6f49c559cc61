//! Infrastructure layer - Artifact loading and logging

pub mod artifacts;
pub mod logging;
