use colored::Colorize;
use std::error::Error;
use subnet_calculator::cmd::CommandLine;
use subnet_calculator::config::Config;
use subnet_calculator::{render, submit};

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let config = Config::from_env()?;
    if let Err(e) = log4rs::init_file(&config.log_config, Default::default()) {
        eprintln!(
            "{} logging disabled, can't load {}: {e}",
            "WARN".on_yellow(),
            config.log_config
        );
    }
    log::info!("#Start main()");

    let commands = CommandLine::parse_args();
    let outcome = submit(commands.form());
    let out = render(
        &outcome,
        commands.format,
        commands.list_limit(config.list_limit),
    )?;
    print!("{out}");

    if !outcome.errors.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}
