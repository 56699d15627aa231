//! Domain layer
//!
//! The customer model and the traits the rest of the service is wired through.
//! - `entities`: Domain models
//! - `ports`: Repository and use case traits

pub mod entities;
pub mod ports;
