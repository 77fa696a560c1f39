mod api;
mod bootstrap;
mod cli;
mod config;
mod print;
mod schema;
mod shell;

use crate::bootstrap::SchedulerBootstrapper;
use crate::cli::{Cli, Commands};
use crate::print::TablePrint;
use crate::shell::ThemeShell;
use api::FolioAPI;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;
use serde_json::Value;
use std::io;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Some(Commands::Completion { shell }) = cli.command {
        let mut cmd = Cli::command();
        let name = env!("CARGO_BIN_NAME");
        generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let mut config = match config::Config::load().await {
        Ok(config) => config,
        Err(err) => {
            if matches!(err.downcast_ref::<io::Error>(), Some(e) if e.kind() == io::ErrorKind::NotFound)
            {
                println!("Config file not found, creating a default local profile.");
                let default_config = config::Config::default();
                default_config.save().await?;
                default_config
            } else {
                return Err(err);
            }
        }
    };

    println!("{}", config);

    match cli.command {
        Some(Commands::Profile { profile }) => {
            if let Some(profile) = profile {
                println!("Changing profile to {}", profile);
                config.change_profile(profile).await?;
                println!("new: {}", config);
            }
        }
        Some(Commands::Params { json }) => {
            let api = FolioAPI::new(&config);
            let parameters = api.get_system_parameters().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&parameters)?);
                return Ok(());
            }
            let rows = parameters
                .parameters
                .iter()
                .map(|(key, value)| vec![key.clone(), display_value(value)])
                .collect();
            TablePrint {
                headers: vec!["Key".to_string(), "Value".to_string()],
                rows,
            }
            .print();
        }
        Some(Commands::Tags { json }) => {
            let api = FolioAPI::new(&config);
            let list = api.get_tags().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&list)?);
                return Ok(());
            }
            let rows = list
                .tags
                .iter()
                .map(|tag| {
                    vec![
                        tag.name.clone(),
                        tag.usage_count.to_string(),
                        tag.color.clone(),
                        tag.description.clone().unwrap_or_default(),
                    ]
                })
                .collect();
            TablePrint {
                headers: vec![
                    "Name".to_string(),
                    "Posts".to_string(),
                    "Color".to_string(),
                    "Description".to_string(),
                ],
                rows,
            }
            .print();
        }
        Some(Commands::Visit { path }) => {
            let api = FolioAPI::new(&config);
            let mut bootstrapper = SchedulerBootstrapper::new(api.client(), api.domain());
            match bootstrapper.mount(&path) {
                Some(request) => {
                    // A page would let the request run detached; the process
                    // has to wait for it or it is dropped on exit.
                    request.await?;
                    println!("{} requested scheduler initialization", path.bold());
                }
                None => println!("{} is not an admin page, nothing to initialize", path),
            }
        }
        Some(Commands::Theme { path }) => {
            let shell = ThemeShell::new(config.theme(), path);
            println!("{} {}", "Wrapping".bold(), shell.children());
            println!("{}", serde_json::to_string_pretty(shell.provider_props())?);
        }
        Some(Commands::Completion { .. }) => {}
        None => {
            println!("No command provided");
        }
    }

    Ok(())
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
