mod agenda_view;
mod args;
mod global_settings;

use crate::agenda_view::agenda_view;
use crate::args::build_cli;
use crate::global_settings::GlobalSettings;
use agenda_lib::{Interval, IntervalSet, importers::{Importer, TextAgenda}};
use anyhow::{Context, Result, bail};
use clap::ArgMatches;
use clap_complete_command::Shell;
use log::debug;
use std::path::PathBuf;

/// Read all agenda files given on the command line into a single agenda
fn load(args: &ArgMatches, id: &str) -> Result<IntervalSet> {
    let mut text = TextAgenda::default();
    let mut agenda = IntervalSet::new();
    for path in args.get_many::<PathBuf>(id).into_iter().flatten() {
        agenda.extend(text.import_file(path)?);
    }
    Ok(agenda)
}

fn main() -> Result<()> {
    let mut cli = build_cli();
    let args = cli.clone().get_matches();
    let globals = GlobalSettings::new(&args);

    env_logger::Builder::new()
        .filter_level(globals.log_level())
        .parse_default_env()
        .init();

    let result = match args.subcommand() {
        Some(("completions", sub)) => {
            if let Some(shell) = sub.get_one::<Shell>("shell").cloned() {
                shell.generate(&mut cli, &mut std::io::stdout());
            }
            return Ok(());
        }
        Some(("show", sub)) => load(sub, "files")?,
        Some(("normalize", sub)) => load(sub, "files")?.normalized(),
        Some(("intersect", sub)) => {
            let mine = load(sub, "MINE")?;
            let theirs = load(sub, "THEIRS")?;
            mine.intersect(
                &theirs,
                sub.get_one::<String>("description").map(String::as_str),
            )
        }
        Some(("free", sub)) => {
            let window = sub
                .get_one::<String>("window")
                .map(String::as_str)
                .unwrap_or_default();
            let window: Interval = window
                .parse()
                .with_context(|| format!("Invalid window {window:?}"))?;
            debug!("Looking for free time in {window}");
            load(sub, "files")?.complement(&window)
        }
        Some((name, _)) => bail!("Unknown command {name}"),
        None => bail!("No command given"),
    };

    println!("{}", agenda_view(&result, &globals)?);
    Ok(())
}
