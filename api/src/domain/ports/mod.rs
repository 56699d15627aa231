//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod repositories;
pub mod usecases;

pub use repositories::CustomerRepository;
pub use usecases::CustomerUsecase;
