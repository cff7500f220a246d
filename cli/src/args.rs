use crate::global_settings::GlobalSettings;
use clap::{Arg, Command, arg, value_parser};
use std::path::PathBuf;

/// The agenda files to read, concatenated into a single agenda
fn files() -> Arg {
    Arg::new("files")
        .value_name("FILE")
        .help("Agenda files, one appointment per line")
        .num_args(1..)
        .required(true)
        .value_parser(value_parser!(PathBuf))
}

pub(crate) fn build_cli() -> Command {
    Command::new("agenda")
        .version("0.1")
        .about("Find common and free time in agendas")
        .subcommand_required(true)
        .flatten_help(true) // show help for all subcommands
        .arg_required_else_help(true) // show full help if nothing given
        .args(GlobalSettings::cli())
        .subcommand(
            Command::new("show")
                .about("Show the appointments, as read")
                .arg(files()),
        )
        .subcommand(
            Command::new("normalize")
                .about("Sort appointments and merge overlapping ones")
                .arg(files()),
        )
        .subcommand(
            Command::new("intersect")
                .about("Show periods common to two agendas")
                .arg(
                    arg!(<MINE> "First agenda, descriptions come from it")
                        .value_parser(value_parser!(PathBuf)),
                )
                .arg(
                    arg!(<THEIRS> "Second agenda")
                        .value_parser(value_parser!(PathBuf)),
                )
                .arg(arg!(-d --description [DESC] "Description for all results")),
        )
        .subcommand(
            Command::new("free")
                .about("Show free periods within a window")
                .arg(
                    arg!(
                        -w --window <WINDOW>
                        "Period to search, as \"YYYY.MM.DD HH:MM HH:MM | description\""
                    )
                    .required(true),
                )
                .arg(files()),
        )
        .subcommand(
            // Use    eval "$(agenda completions zsh)"
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .value_name("SHELL")
                        .help("The shell to generate the completions for")
                        .required(true)
                        .value_parser(clap::builder::EnumValueParser::<
                            clap_complete_command::Shell,
                        >::new()),
                ),
        )
}
