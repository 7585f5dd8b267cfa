#![no_std]

extern crate alloc;

pub mod constants;
pub mod errors;
pub mod events;
pub mod field;
pub mod types;
pub mod vss;

#[cfg(any(test, feature = "testutils"))]
pub mod dealer;
