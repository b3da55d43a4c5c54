use std::fmt;

use strum::Display;

use crate::DiskCount;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum Peg {
    A,
    B,
    C,
}

/// A single disk leaving `from` and landing on `to`.
/// Disks are numbered from 1 (the smallest) upwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub disk: DiskCount,
    pub from: Peg,
    pub to: Peg,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "move {} --> {}", self.from, self.to)
    }
}
