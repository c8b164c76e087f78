//! Background Tasks Module
//!
//! Optional maintenance tasks. Nothing in the read or write paths depends
//! on these; expiry is lazy by design.

mod sweep;

pub use sweep::spawn_sweep_task;
