// Legend for various fix-this comments:
//   * "TODO" - bug or missing crucial feature.
//   * "Improvement potential" - missing nice-to-have feature or an opportunity
//       to make code better or faster.

#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

mod command;
mod console_game;
mod feedback;
mod picker;
mod scene;
mod tui;

use anyhow::Context;
use checkers_core::Rules;
use clap::{Command, arg};


fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let matches = Command::new("Checkers")
        .version(clap::crate_version!())
        .about(concat!(
            "Plays checkers in the terminal. Reads commands from stdin: ",
            "`click <x> <y>`, `hover <x> <y>`, `board`, `quit`. ",
            "Coordinates are in [-1, 1], with (-1, 1) being the top left corner."
        ))
        .arg(
            arg!(--"rules" <FILE> "Path to the rules file: yaml-serialized Rules.")
                .required(false),
        )
        .get_matches();

    let rules = match matches.get_one::<String>("rules") {
        Some(filename) => read_rules_file(filename)?,
        None => Rules::classic(),
    };
    console_game::run(rules)
}

fn read_rules_file(filename: &str) -> anyhow::Result<Rules> {
    let contents = std::fs::read_to_string(filename)
        .with_context(|| format!("Failed to read rules file '{filename}'."))?;
    serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse rules file '{filename}'."))
}
