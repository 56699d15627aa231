//! SeaORM entities
//!
//! Row models for the relational store. Domain code never sees these
//! directly; adapters convert them into `domain::entities` types.

pub mod customers;
