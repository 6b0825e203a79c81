pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::config::{AppConfig, StorageBackend};
use crate::database::Repositories;
use crate::usecase::AuthService;

#[derive(Parser)]
#[command(name = "planner")]
#[command(about = "Planner CLI - Operator commands for the Planner API storage")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Create the storage tables if they do not exist")]
    Migrate,

    #[command(flatten)]
    Session(commands::session::SessionCommands),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli, config: &AppConfig) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Migrate => commands::migrate::handle(config, output_format).await,
        Commands::Session(cmd) => {
            if config.storage.backend == StorageBackend::Memory {
                anyhow::bail!("STORAGE_BACKEND=memory keeps sessions inside the server process; the CLI cannot reach them");
            }
            let repositories = Repositories::open(config).await?;
            let auth = AuthService::new(repositories.credentials.clone());
            let result = commands::session::handle(cmd, &auth, output_format).await;
            repositories.close().await;
            result
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commands::session::SessionCommands;

    #[test]
    fn session_commands_are_top_level() {
        let cli = Cli::try_parse_from(["planner", "grant", "alice"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Session(SessionCommands::Grant { ref username }) if username == "alice"
        ));

        let cli = Cli::try_parse_from(["planner", "--json", "check", "abc"]).unwrap();
        assert!(matches!(OutputFormat::from_cli(&cli), OutputFormat::Json));
        assert!(matches!(cli.command, Commands::Session(SessionCommands::Check { .. })));

        assert!(Cli::try_parse_from(["planner", "migrate"]).is_ok());
        assert!(Cli::try_parse_from(["planner", "revoke"]).is_err());
    }

    #[tokio::test]
    async fn session_commands_refuse_memory_storage() {
        let mut config = AppConfig::default();
        config.storage.backend = StorageBackend::Memory;

        for args in [
            ["planner", "grant", "alice"],
            ["planner", "revoke", "alice"],
            ["planner", "check", "t1"],
        ] {
            let cli = Cli::try_parse_from(args).unwrap();
            let err = run(cli, &config).await.unwrap_err();
            assert!(err.to_string().contains("STORAGE_BACKEND=memory"), "{:?}", args);
        }
    }

    #[tokio::test]
    async fn migrate_refuses_memory_storage() {
        let mut config = AppConfig::default();
        config.storage.backend = StorageBackend::Memory;

        let cli = Cli::try_parse_from(["planner", "migrate"]).unwrap();
        assert!(run(cli, &config).await.is_err());
    }
}
