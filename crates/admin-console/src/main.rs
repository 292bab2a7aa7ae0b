//! Admin Console - submit account administration forms from a terminal.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use admin_console_lib::{
    AdminClient, ConsoleConfig, DeleteUserForm, FormController, Notice, TerminalNotifier,
};

#[derive(Parser)]
#[command(name = "admin-console")]
#[command(about = "Account administration console")]
struct Cli {
    /// Gateway base URL
    #[arg(long, global = true, env = "ADMIN_API_URL")]
    base_url: Option<String>,

    /// Bearer token for the gateway
    #[arg(long, global = true, env = "ADMIN_API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Delete a user account by username
    DeleteUser {
        username: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let defaults = ConsoleConfig::from_env();
    let config = ConsoleConfig::new(
        cli.base_url.unwrap_or(defaults.base_url),
        cli.token.or(defaults.token),
    );

    let controller = FormController::new(AdminClient::new(&config)?, TerminalNotifier);

    match cli.command {
        Commands::DeleteUser { username } => {
            let notice = controller.on_submit(&DeleteUserForm::new(username)).await;
            if let Notice::Error(_) = notice {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
