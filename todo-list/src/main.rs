use clap::Parser;
use log::{LevelFilter, info};
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use std::io;
use std::path::PathBuf;
use todo_list::Menu;
use todo_list::config::{self, Config};

/// Keep a todo list from an interactive menu
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// TOML file to read settings from
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Overrides the configured log level (off, error, warn, info, debug, trace)
    #[arg(short, long)]
    log_level: Option<String>,
}

fn init_logging(level: LevelFilter) -> anyhow::Result<()> {
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let config = log4rs::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let config = Config::load(args.config.as_deref())?;
    let level = match &args.log_level {
        Some(level) => config::parse_level(level)?,
        None => config.log.level_filter()?,
    };
    init_logging(level)?;
    info!("Loaded configuration: {:?}", config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock(), config.display);
    menu.run()
}
