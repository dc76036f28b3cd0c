//! Step definitions for IMS registration behaviour scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
