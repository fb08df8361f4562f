pub mod cli;
pub mod config;
pub mod errors;
pub mod pagination;
pub mod render;
pub mod services;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::{Cli, PaginationArgs};

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::errors::{with_action_context, with_config_context};
use crate::pagination::PaginationConfig;
use crate::render::renderer_for;
use crate::services::{NavigationAction, NavigationService};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_window(pagination: &PaginationArgs, current_page: u64) -> Result<()> {
    let app_config = AppConfig::new();
    let mut service = build_service(pagination, &app_config)?;
    println!("{}", service.show(current_page)?);
    Ok(())
}

pub fn handle_navigate(pagination: &PaginationArgs, actions: &[String]) -> Result<()> {
    let app_config = AppConfig::new();
    let actions = parse_actions(actions)?;
    let mut service = build_service(pagination, &app_config)?;

    for frame in service.run(&actions)? {
        println!("{}", frame);
    }
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

pub fn parse_actions(raw: &[String]) -> Result<Vec<NavigationAction>> {
    raw.iter()
        .map(|action| with_action_context(action.parse::<NavigationAction>(), action))
        .collect()
}

fn build_service(pagination: &PaginationArgs, app_config: &AppConfig) -> Result<NavigationService> {
    let config = with_config_context(
        PaginationConfig::with_settings(
            pagination.total_records,
            pagination.page_limit,
            pagination
                .page_neighbours
                .unwrap_or(app_config.pagination.page_neighbours),
            &app_config.pagination,
        ),
        pagination.total_records,
        pagination.page_limit,
    )?;
    let renderer = renderer_for(pagination.format, &app_config.render);
    Ok(NavigationService::new(config, renderer))
}
