//! ariatabs demo
//!
//! Mounts a tab group and replays a script of events against it, printing
//! the committed HTML after each step.
//!
//! Run with `--help` for the step syntax.

mod cli;
mod sample;

use clap::Parser;

use ariatabs_core::{Config, KeyEvent, Result, TabGroup};

use crate::cli::{Options, Step};

fn run(options: Options) -> Result<()> {
    let config = match &options.config {
        Some(path) => Config::load(path)?,
        None => Config::new("Entertainment"),
    };
    let items = match &options.items {
        Some(path) => ariatabs_core::load_items(path)?,
        None => sample::items()?,
    };

    let mut group = TabGroup::mount(items, config)?;
    println!("{}", group.update());

    for step in options.steps {
        let count = group.len();
        match &step {
            Step::Key(key) => {
                let mut event = KeyEvent::new(key.as_str());
                group.on_key_down(&mut event);
                tracing::info!(
                    key = %key,
                    prevented = event.is_default_prevented(),
                    active = group.active_index(),
                    "Key"
                );
            }
            Step::Click(id) => {
                group.on_click(id);
                tracing::info!(target_id = %id, active = group.active_index(), "Click");
            }
            Step::Intent(intent) => {
                group.navigate(*intent);
                tracing::info!(intent = %intent, active = group.active_index(), "Intent");
            }
            Step::Activate(index) if *index < count => {
                group.activate(*index);
            }
            Step::Activate(index) => {
                tracing::warn!(index, count, "Skipping out-of-range activation");
                continue;
            }
        }

        let html = group.update().to_html();
        println!("{}", html);
        if let Some(focused) = group.focused_id() {
            println!("focused: {}", focused);
        }
    }

    Ok(())
}

fn main() {
    let options = Options::parse();
    ariatabs_core::init_logging();

    if let Err(e) = run(options) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
