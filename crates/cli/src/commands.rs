//! CLI commands

use anyhow::{Result, bail};
use clap::{Subcommand, ValueEnum};
use parkspot_frontend_common::flows::{LoginPhase, SearchPhase};
use parkspot_frontend_common::{
    AccessLevel, CitySearch, History, LoginFlow, Route, SessionStore, create_client,
};
use parkspot_http::{Identity, ParkingClient, ResourceId, Role};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use crate::config::Settings;
use crate::render;
use crate::shell::Shell;

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive session (default)
    Shell,

    /// Search parking lots in a city and print them
    Search {
        /// City name
        city: String,
    },

    /// Show the navigation links a role would see
    Links {
        #[arg(long, value_enum, default_value = "anonymous")]
        role: RoleArg,
    },

    /// Check a set of credentials against the server
    Login {
        #[arg(long)]
        email: String,

        #[arg(long, env = "PARKSPOT_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Configuration file helpers
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write a configuration file with the default settings
    Init {
        /// Output file path (defaults to the user config directory)
        output: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RoleArg {
    Anonymous,
    User,
    Admin,
}

impl RoleArg {
    fn access(self) -> AccessLevel {
        let preview = |role| Identity {
            id: ResourceId::from("preview"),
            email: "preview@parkspot.local".to_string(),
            role,
        };
        match self {
            Self::Anonymous => AccessLevel::Anonymous,
            Self::User => AccessLevel::User(preview(Role::User)),
            Self::Admin => AccessLevel::Admin(preview(Role::Admin)),
        }
    }
}

impl Commands {
    pub async fn execute(self, settings: Settings) -> Result<()> {
        match self {
            Commands::Shell => {
                let client = connect(&settings)?;
                Shell::new(client, settings.redirect_delay()).run().await
            }
            Commands::Search { city } => search(&connect(&settings)?, &city).await,
            Commands::Links { role } => {
                println!("{}", render::nav_line(&role.access(), true));
                Ok(())
            }
            Commands::Login { email, password } => {
                login(&connect(&settings)?, &email, &password).await
            }
            Commands::Config { command } => command.execute(&settings),
        }
    }
}

impl ConfigCommands {
    pub fn execute(self, settings: &Settings) -> Result<()> {
        match self {
            ConfigCommands::Init { output, force } => {
                let config_path = match output {
                    Some(path) => path,
                    None => dirs::config_dir()
                        .unwrap_or_else(|| PathBuf::from("."))
                        .join("parkspot")
                        .join("parkspot.toml"),
                };
                if config_path.exists() && !force {
                    bail!(
                        "{} already exists, pass --force to overwrite",
                        config_path.display()
                    );
                }

                if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(&config_path, Settings::default_toml()?)?;
                println!("Generated configuration at: {}", config_path.display());
                Ok(())
            }
            ConfigCommands::Show => {
                print!("{}", toml::to_string_pretty(settings)?);
                Ok(())
            }
        }
    }
}

fn connect(settings: &Settings) -> Result<ParkingClient> {
    let api = settings.api_settings();
    info!(base_url = %api.base_url, "Connecting to ParkSpot");
    Ok(create_client(&api)?)
}

async fn search(client: &ParkingClient, city: &str) -> Result<()> {
    let mut search = CitySearch::new();
    if let Err(validation) = search.submit(client, city).await {
        bail!("{validation}");
    }

    let view = render::search_view(&search);
    if let SearchPhase::Error { .. } = search.phase() {
        bail!("{view}");
    }
    println!("{view}");
    Ok(())
}

async fn login(client: &ParkingClient, email: &str, password: &str) -> Result<()> {
    let session = SessionStore::new();
    let mut flow = LoginFlow::new(session.clone()).with_redirect_delay(Duration::ZERO);
    let mut history = History::starting_at(Route::Login);

    if let Err(validation) = flow.submit(client, &mut history, email, password).await {
        bail!("{validation}");
    }

    match flow.phase() {
        LoginPhase::Failed { message } => bail!("{message}"),
        _ => {
            println!("{}", render::login_view(&flow));
            println!("{}", render::identity_line(session.identity().as_ref()));
            Ok(())
        }
    }
}
