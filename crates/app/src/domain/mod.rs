//! Carlot Domain Concerns

pub mod cars;
