#![cfg_attr(not(test), no_std)]

pub mod constraint;
pub mod group;
pub mod path;
pub mod segment;

/// Capacity of event marker names.
pub const NAME_CAPACITY: usize = 32;
