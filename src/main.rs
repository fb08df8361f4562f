use anyhow::Result;

use page_window::cli::Command;
use page_window::{handle_completions, handle_navigate, handle_window, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Window { pagination, current_page } => handle_window(pagination, *current_page),
        Command::Navigate { pagination, actions } => handle_navigate(pagination, actions),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
