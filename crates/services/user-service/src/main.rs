//! User Service - command-line access to an in-memory user directory.
//!
//! Every invocation starts from a freshly seeded directory.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::AppResult;
use domain::{User, UserId};
use user_service_lib::config::UserServiceConfig;
use user_service_lib::service::UserService;

#[derive(Parser)]
#[command(name = "user-service")]
#[command(about = "In-memory user directory")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print users as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Seed file with the initial records
    #[arg(long, global = true, env = "USER_SERVICE_SEED_FILE")]
    seed: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and print the user's name
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Look up a user by id
    Get {
        #[arg(long)]
        id: UserId,
    },
    /// Register a new user
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        name: String,
    },
    /// List all users
    List,
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = UserServiceConfig::from_env();
    if let Some(seed) = cli.seed.clone() {
        config = config.with_seed_file(seed);
    }
    tracing::debug!(?config, "Configuration loaded");

    if let Err(e) = run(cli, config).await {
        tracing::error!(code = e.code(), "Command failed: {}", e.user_message());
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: UserServiceConfig) -> AppResult<()> {
    let service = user_service_lib::build_user_service(&config).await?;

    match cli.command {
        Commands::Login { email, password } => {
            let user = service.login(email, password).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&user)?);
            } else {
                println!("{}", user.name);
            }
        }
        Commands::Get { id } => {
            let user = service.get_user(id).await?;
            print_users(&[user], cli.json)?;
        }
        Commands::Register {
            email,
            password,
            name,
        } => {
            let user = service.register(email, password, name).await?;
            print_users(&[user], cli.json)?;
        }
        Commands::List => {
            let users = service.list_users().await?;
            print_users(&users, cli.json)?;
        }
    }

    Ok(())
}

fn print_users(users: &[User], json: bool) -> AppResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(users)?);
        return Ok(());
    }

    for user in users {
        println!("{}\t{}\t{}", user.id, user.email, user.name);
    }
    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
