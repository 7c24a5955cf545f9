//! Domain building blocks shared by the data access and HTTP layers.

pub mod audit;
pub mod error;
pub mod thickness;
pub mod types;
