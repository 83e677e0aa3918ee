use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use clap::Parser;
use log::info;

mod clock;
mod config;
mod error;
mod format;
mod sink;
mod timer;

use clock::SystemClock;
use config::{default_config_path, load_config};
use sink::SketchyBar;
use timer::Timer;

#[derive(Parser, Debug)]
#[command(name = "bartimer")]
#[command(about = "Stopwatch or countdown shown in a SketchyBar item")]
struct Args {
    /// Countdown length in seconds; omit to run a stopwatch.
    /// Negative and malformed values are passed through to the timer.
    #[arg(allow_hyphen_values = true)]
    seconds: Option<String>,

    /// Path to config.json (default: ~/.config/bartimer/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Bar item to update, overriding the config
    #[arg(long)]
    item: Option<String>,
}

fn main() -> error::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let config_path = args.config.unwrap_or_else(default_config_path);
    let mut config = load_config(&config_path);
    if let Some(item) = args.item {
        config.item = item;
    }

    let running = Arc::new(AtomicBool::new(true));
    let flag = Arc::clone(&running);
    ctrlc::set_handler(move || {
        flag.store(false, Ordering::SeqCst);
    })?;

    let policy = config.alert_policy();
    let mut timer = Timer::new(SystemClock, SketchyBar::new(config), policy, running);
    let outcome = timer.run(args.seconds.as_deref());
    info!("Timer finished: {:?}", outcome);

    Ok(())
}
