use std::io::Write;

use env_logger::fmt::Color;
use env_logger::{Builder, Target};
use log::{Level, LevelFilter};

/// Builds a clap value parser that accepts exactly the strum variant names of `$e`.
macro_rules! clap_enum_variants {
    ($e: ty) => {{
        use clap::builder::TypedValueParser;
        use strum::VariantNames;
        clap::builder::PossibleValuesParser::new(<$e>::VARIANTS).map(|s| s.parse::<$e>().unwrap())
    }};
}

/// Installs the global logger. Records go to stderr, stdout is reserved for results.
pub fn init_logger(level: LevelFilter) {
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .target(Target::Stderr)
        .format(|buf, record| {
            let mut style = buf.style();

            match record.level() {
                Level::Error => {
                    style.set_color(Color::Red);
                }
                Level::Warn => {
                    style.set_color(Color::Yellow);
                }
                _ => {}
            }

            writeln!(buf, "{}", style.value(record.args()))
        })
        .init();
}
