//! Game implementations.

pub mod isolation;
