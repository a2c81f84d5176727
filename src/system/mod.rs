//! Sampling of kernel-exposed CPU frequency and memory interfaces.

pub mod collector;
pub mod cpu;
pub mod error;
pub mod memory;
pub mod sources;

pub use collector::Collector;
