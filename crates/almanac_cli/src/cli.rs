use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Daily almanac: biorhythm, Maya calendar and five-element dress advice.
#[derive(Parser)]
#[command(name = "almanac", version, about = "Daily almanac readings as JSON")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Content tables in TOML; the bundled tables are used when omitted.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Today's biorhythm for a birth date.
    BiorhythmToday {
        /// Birth date (YYYY-MM-DD).
        birth: String,
    },
    /// Biorhythm of one day for a birth date.
    Biorhythm {
        /// Birth date (YYYY-MM-DD).
        birth: String,
        /// Target date (YYYY-MM-DD).
        date: String,
    },
    /// Biorhythm series around a centre date.
    BiorhythmRange {
        /// Birth date (YYYY-MM-DD).
        birth: String,
        #[command(flatten)]
        window: Window,
    },
    /// Maya reading for today.
    MayaToday,
    /// Maya reading for a date.
    Maya {
        /// Date (YYYY-MM-DD).
        date: String,
    },
    /// Maya readings around a centre date.
    MayaRange {
        #[command(flatten)]
        window: Window,
    },
    /// Maya birth reading: life purpose, traits and energy field.
    MayaBirth {
        /// Birth date (YYYY-MM-DD).
        birth: Option<String>,
    },
    /// Dress advice for today.
    DressToday,
    /// Dress advice for a date.
    Dress {
        /// Date (YYYY-MM-DD).
        date: String,
    },
    /// Dress advice around a centre date.
    DressRange {
        #[command(flatten)]
        window: Window,
    },
    /// Query several birth dates in turn and print the resulting history.
    History {
        /// Which history to fill.
        #[arg(long, value_enum, default_value_t = HistoryKind::Biorhythm)]
        kind: HistoryKind,
        /// Birth dates (YYYY-MM-DD), oldest query first.
        #[arg(required = true)]
        births: Vec<String>,
    },
}

/// Days before and after a centre date; today when no centre is given.
#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct Window {
    /// Centre date (YYYY-MM-DD).
    #[arg(long)]
    pub center: Option<String>,

    /// Days before the centre [default depends on the command].
    #[arg(long)]
    pub before: Option<u32>,

    /// Days after the centre [default depends on the command].
    #[arg(long)]
    pub after: Option<u32>,
}

impl Window {
    /// `(before, after)` with unset sides taken from `default`.
    pub fn span(&self, default: (u32, u32)) -> (u32, u32) {
        (
            self.before.unwrap_or(default.0),
            self.after.unwrap_or(default.1),
        )
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryKind {
    Biorhythm,
    Maya,
}
