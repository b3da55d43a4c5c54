//! The hanoi CLI tool

#[macro_use]
mod util;

use std::io::{self, BufWriter, Read, Write};

use clap::Parser;
use eyre::{Result, WrapErr};
use hanoi::{parse_disk_count, solve, DiskCount, Method, MoveCount};
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "hanoi", author, version, about, long_about = None)]
struct Cli {
    #[arg(long, hide = true)]
    markdown_help: bool,

    /// Set log filter value [ off, error, warn, info, debug, trace ]
    #[arg(long)]
    #[arg(default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,

    /// How to count the moves.
    #[arg(long)]
    #[arg(default_value_t = Method::ClosedForm)]
    #[arg(value_parser = clap_enum_variants!(Method))]
    method: Method,

    /// Print every move, one per line, before the count.
    /// The moves are always found by the recursive solver.
    #[arg(long)]
    #[arg(default_value_t = false)]
    print_moves: bool,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    util::init_logger(args.log_level);

    if args.markdown_help {
        clap_markdown::print_help_markdown::<Cli>();
        return Ok(());
    }

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .wrap_err("failed to read the disk count from stdin")?;
    let disks = parse_disk_count(&input).wrap_err("failed to parse the disk count")?;
    log::debug!("Read disk count {disks}");

    let mut out = BufWriter::new(io::stdout().lock());
    let moves = if args.print_moves {
        list_moves(disks, args.method, &mut out)?
    } else {
        args.method
            .count(disks)
            .wrap_err_with(|| format!("failed to count the moves for {disks} disks"))?
    };
    writeln!(out, "{moves}")?;
    out.flush()?;

    Ok(())
}

fn list_moves(disks: DiskCount, method: Method, out: &mut impl Write) -> Result<MoveCount> {
    if method != Method::Recursive {
        log::warn!("Listing moves solves the puzzle recursively, ignoring `--method {method}`");
    }
    let moves = solve(disks, |m| {
        writeln!(out, "{m}").wrap_err("failed to write the move list")
    })?;
    Ok(moves.into())
}
