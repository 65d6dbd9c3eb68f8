// Library crate for reactgate
// Exposes reaction collectors and the adapters they run on

pub mod adapters;
pub mod bridge;
pub mod collector;
