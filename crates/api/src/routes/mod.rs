//! Route handlers

pub mod alarm;
pub mod events;
pub mod landmarks;
pub mod stats;
