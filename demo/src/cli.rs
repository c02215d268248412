use std::path::PathBuf;

use ariatabs_core::NavigationIntent;
use clap::{Parser, ValueHint};

/// CLI options for the ariatabs demo.
#[derive(Parser, Debug)]
#[clap(author, about, version)]
pub struct Options {
    /// JSON widget configuration [default: built-in, labelled "Entertainment"].
    #[clap(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// JSON array of tab items [default: built-in sample].
    #[clap(long, value_hint = ValueHint::FilePath)]
    pub items: Option<PathBuf>,

    /// Events to replay: a DOM key name (ArrowRight, Home, ...), click:<tab id>,
    /// activate:<index> or intent:<next|previous|first|last>.
    #[clap(value_parser = parse_step)]
    pub steps: Vec<Step>,
}

/// One scripted event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Key(String),
    Click(String),
    Activate(usize),
    Intent(NavigationIntent),
}

fn parse_step(s: &str) -> Result<Step, String> {
    if let Some(id) = s.strip_prefix("click:") {
        return Ok(Step::Click(id.to_string()));
    }
    if let Some(index) = s.strip_prefix("activate:") {
        return index
            .parse()
            .map(Step::Activate)
            .map_err(|_| format!("invalid tab index: {}", index));
    }
    if let Some(name) = s.strip_prefix("intent:") {
        return name.parse().map(Step::Intent).map_err(|e| format!("{}", e));
    }
    Ok(Step::Key(s.to_string()))
}
