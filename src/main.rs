use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use minish::command::example::echo;
use minish::config::DEFAULT_PROMPT;
use minish::{CommandRegistry, Shell, ShellConfig};

#[derive(Parser)]
#[command(name = "minish")]
#[command(version, about = "A minimal interactive command shell")]
struct Cli {
    /// Prompt printed before each line is read
    #[arg(long, default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable verbose logging on stderr (overridden by RUST_LOG)
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let registry =
        CommandRegistry::with_builtins(vec![echo()]).context("failed to register commands")?;
    let config = ShellConfig::default()
        .with_prompt(cli.prompt)
        .with_color(!cli.no_color);

    let mut shell = Shell::stdio(config, registry);
    let code = shell.run().context("shell terminated abnormally")?;

    process::exit(code)
}
