//! Move counting for the Tower of Hanoi

mod counter;
mod error;
mod input;
mod peg;

pub use counter::{count, solve, Method, MAX_RECURSIVE_DISKS};
pub use error::Error;
pub use input::parse_disk_count;
pub use peg::{Move, Peg};

/// The number of disks in a puzzle instance.
pub type DiskCount = u32;

/// An exact move count, large enough for any disk count.
pub type MoveCount = num_bigint::BigUint;
