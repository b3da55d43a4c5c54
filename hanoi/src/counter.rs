use num_bigint::BigUint;
use num_traits::{One, Zero};
use strum::{Display, EnumString, EnumVariantNames};

use crate::{DiskCount, Error, Move, MoveCount, Peg};

/// The largest disk count whose move count fits the `u64` accumulator
/// of the recursive solver.
pub const MAX_RECURSIVE_DISKS: DiskCount = 64;

/// How the number of moves is computed. All methods agree on every
/// disk count they support.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumString, EnumVariantNames, Display)]
pub enum Method {
    /// Walks the classic recursive solution and counts every move.
    #[strum(serialize = "recursive")]
    Recursive,
    /// `2^d - 1`.
    #[default]
    #[strum(serialize = "closed-form")]
    ClosedForm,
    /// Starts from zero and applies `n -> 2n + 1` once per disk.
    #[strum(serialize = "doubling")]
    Doubling,
}

impl Method {
    pub fn count(self, disks: DiskCount) -> Result<MoveCount, Error> {
        log::debug!("Counting moves for {disks} disks ({self})");
        match self {
            Method::Recursive => solve(disks, |_| Ok::<_, Error>(())).map(MoveCount::from),
            Method::ClosedForm => Ok(count(disks)),
            Method::Doubling => Ok(count_by_doubling(disks)),
        }
    }
}

/// Returns the number of moves needed to transfer a tower of `disks` disks,
/// i.e. `2^disks - 1`.
pub fn count(disks: DiskCount) -> MoveCount {
    (BigUint::one() << disks) - 1u32
}

fn count_by_doubling(disks: DiskCount) -> MoveCount {
    (0..disks).fold(BigUint::zero(), |moves, _| (moves << 1u32) + 1u32)
}

/// Solves the puzzle recursively, moving the tower from peg `A` to peg `C`
/// via peg `B`. Every move is passed to `on_move` in the order it is
/// performed; the first error returned by `on_move` stops the walk.
/// Returns the number of moves.
pub fn solve<E: From<Error>>(
    disks: DiskCount,
    mut on_move: impl FnMut(Move) -> Result<(), E>,
) -> Result<u64, E> {
    if disks > MAX_RECURSIVE_DISKS {
        return Err(Error::TooManyDisks {
            disks,
            max: MAX_RECURSIVE_DISKS,
        }
        .into());
    }
    log::trace!("Solving {disks} disks recursively");
    let moves = transfer(disks, Peg::A, Peg::B, Peg::C, 0, &mut on_move)?;
    log::trace!("Solved {disks} disks in {moves} moves");
    Ok(moves)
}

fn transfer<E, F: FnMut(Move) -> Result<(), E>>(
    disks: DiskCount,
    from: Peg,
    via: Peg,
    to: Peg,
    moves: u64,
    on_move: &mut F,
) -> Result<u64, E> {
    match disks {
        0 => Ok(moves),
        1 => {
            on_move(Move { disk: 1, from, to })?;
            Ok(moves + 1)
        }
        _ => {
            let moves = transfer(disks - 1, from, to, via, moves, on_move)?;
            on_move(Move {
                disk: disks,
                from,
                to,
            })?;
            transfer(disks - 1, via, from, to, moves + 1, on_move)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;
    use test_log::test;

    #[test]
    fn known_counts() {
        assert_eq!(count(0), MoveCount::from(0u32));
        assert_eq!(count(1), MoveCount::from(1u32));
        assert_eq!(count(2), MoveCount::from(3u32));
        assert_eq!(count(10), MoveCount::from(1023u32));
        assert_eq!(count(27), MoveCount::from(134217727u32));
    }

    #[test]
    fn power_of_two_minus_one() {
        for disks in 1..=128 {
            assert_eq!(count(disks), BigUint::from(2u32).pow(disks) - 1u32);
        }
    }

    #[test]
    fn methods_agree() {
        for disks in 0..=20 {
            let expected = count(disks);
            for method in [Method::Recursive, Method::ClosedForm, Method::Doubling] {
                assert_eq!(method.count(disks), Ok(expected.clone()), "{method}");
            }
        }
        assert_eq!(Method::Doubling.count(200), Ok(count(200)));
    }

    #[test]
    fn large_tower() {
        assert_eq!(count(64), MoveCount::from(u64::MAX));
        assert_eq!(Method::ClosedForm.count(200).unwrap().bits(), 200);
    }

    #[test]
    fn recursive_limit() {
        assert_eq!(
            Method::Recursive.count(65),
            Err(Error::TooManyDisks { disks: 65, max: 64 })
        );
    }

    #[test]
    fn idempotent() {
        assert_eq!(count(33), count(33));
        assert_eq!(Method::Recursive.count(12), Method::Recursive.count(12));
    }

    #[test]
    fn empty_tower() {
        let mut moves = vec![];
        assert_eq!(
            solve(0, |m| {
                moves.push(m);
                Ok::<_, Error>(())
            }),
            Ok(0)
        );
        assert!(moves.is_empty());
    }

    #[test]
    fn two_disks() {
        let mut moves = vec![];
        assert_eq!(
            solve(2, |m| {
                moves.push(m.to_string());
                Ok::<_, Error>(())
            }),
            Ok(3)
        );
        assert_eq!(moves, ["move A --> B", "move A --> C", "move B --> C"]);
    }

    #[test]
    fn moves_are_legal() {
        let disks = 7;
        let mut pegs: [Vec<DiskCount>; 3] = [(1..=disks).rev().collect(), vec![], vec![]];
        let index = |peg: Peg| peg as usize;
        let total = solve(disks, |m| {
            let disk = pegs[index(m.from)].pop().unwrap();
            assert_eq!(disk, m.disk);
            if let Some(&top) = pegs[index(m.to)].last() {
                assert!(top > disk, "disk {disk} placed on disk {top}");
            }
            pegs[index(m.to)].push(disk);
            Ok::<_, Error>(())
        })
        .unwrap();
        assert_eq!(MoveCount::from(total), count(disks));
        assert_eq!(pegs[index(Peg::C)], (1..=disks).rev().collect::<Vec<_>>());
    }

    #[derive(Debug, PartialEq)]
    enum Stop {
        Solver(Error),
        Listener(usize),
    }

    impl From<Error> for Stop {
        fn from(e: Error) -> Self {
            Stop::Solver(e)
        }
    }

    #[test]
    fn failing_listener_stops_the_walk() {
        let mut seen = 0;
        let result = solve(40, |_| {
            seen += 1;
            if seen == 3 {
                Err(Stop::Listener(seen))
            } else {
                Ok(())
            }
        });
        assert_eq!(result, Err(Stop::Listener(3)));
        assert_eq!(seen, 3);
    }

    #[test]
    fn solver_errors_convert_into_listener_error() {
        assert_eq!(
            solve(65, |_| Ok::<_, Stop>(())),
            Err(Stop::Solver(Error::TooManyDisks { disks: 65, max: 64 }))
        );
    }

    #[test]
    fn method_names() {
        assert_eq!(Method::from_str("closed-form"), Ok(Method::ClosedForm));
        assert_eq!(Method::Recursive.to_string(), "recursive");
        assert_eq!(Method::default(), Method::ClosedForm);
    }
}
