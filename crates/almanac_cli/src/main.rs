mod cli;
mod logging;

use std::process;

use almanac_rs::{Almanac, BIORHYTHM_WINDOW, DRESS_WINDOW, MAYA_WINDOW};
use anyhow::{Context, Result, anyhow};
use clap::Parser;
use serde::Serialize;
use tracing::debug;

use crate::cli::{Cli, Command, HistoryKind};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let almanac = match &cli.config {
        Some(path) => Almanac::from_file(path)
            .with_context(|| format!("loading tables from {}", path.display()))?,
        None => Almanac::embedded().context("loading bundled tables")?,
    };

    match cli.command {
        Command::BiorhythmToday { birth } => emit(&almanac.biorhythm_today(&birth)?),
        Command::Biorhythm { birth, date } => emit(&almanac.biorhythm(&birth, &date)?),
        Command::BiorhythmRange { birth, window } => {
            let (before, after) = window.span(BIORHYTHM_WINDOW);
            let series = match window.center {
                Some(center) => almanac.biorhythm_range_around(&birth, &center, before, after)?,
                None => almanac.biorhythm_range(&birth, before, after)?,
            };
            emit(&series)
        }
        Command::MayaToday => emit(&almanac.maya_today()),
        Command::Maya { date } => emit(&almanac.maya_info(&date)),
        Command::MayaRange { window } => {
            let (before, after) = window.span(MAYA_WINDOW);
            match window.center {
                Some(center) => emit(&almanac.maya_range_around(&center, before, after)),
                None => emit(&almanac.maya_range(before, after)),
            }
        }
        Command::MayaBirth { birth } => emit(&almanac.maya_birth_info(birth.as_deref())),
        Command::DressToday => emit(&almanac.dress_today()?),
        Command::Dress { date } => emit(&almanac.dress_info(&date)?),
        Command::DressRange { window } => {
            let (before, after) = window.span(DRESS_WINDOW);
            let range = match window.center {
                Some(center) => almanac.dress_range_around(&center, before, after)?,
                None => almanac.dress_range(before, after)?,
            };
            emit(&range)
        }
        Command::History { kind, births } => emit(&fill_history(&almanac, kind, &births)?),
    }
}

/// Run one query per birth date, then return that history.
fn fill_history(almanac: &Almanac, kind: HistoryKind, births: &[String]) -> Result<Vec<String>> {
    for birth in births {
        debug!(?kind, %birth, "history query");
        match kind {
            HistoryKind::Biorhythm => {
                almanac
                    .biorhythm_today(birth)
                    .with_context(|| format!("querying {birth}"))?;
            }
            HistoryKind::Maya => {
                almanac
                    .maya_birth_info(Some(birth.as_str()))
                    .into_result()
                    .map_err(|e| anyhow!(e))
                    .with_context(|| format!("querying {birth}"))?;
            }
        }
    }
    Ok(match kind {
        HistoryKind::Biorhythm => almanac.biorhythm_history(),
        HistoryKind::Maya => almanac.maya_history(),
    })
}

fn emit<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialising response")?;
    println!("{json}");
    Ok(())
}
