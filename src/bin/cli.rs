use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;

use jwtgate::cli::create_admin;
use jwtgate::state::run_migrations;
use jwtgate_config::{DatabaseConfig, LoggingConfig, PasswordConfig};
use jwtgate_core::BcryptHasher;
use jwtgate_db::{PgUserStore, init_db_pool};
use jwtgate_observability::init_logging;

#[derive(Parser)]
#[command(name = "jwtgate-cli")]
#[command(about = "jwtgate CLI - administrative tools for jwtgate", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an administrator account
    CreateAdmin {
        /// Display name
        #[arg(short = 'n', long, env = "ADMIN_NAME", default_value = "Admin")]
        name: String,

        /// Email address
        #[arg(short = 'e', long, env = "ADMIN_EMAIL")]
        email: String,

        /// Password
        #[arg(short = 'p', long, env = "ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    let cli = Cli::parse();

    if let Err(e) = init_logging(&LoggingConfig::from_env().unwrap_or_default()) {
        eprintln!("failed to initialise logging: {}", e);
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::CreateAdmin {
            name,
            email,
            password,
        } => {
            let pool = init_db_pool(&DatabaseConfig::from_env()?)
                .await
                .context("failed to connect to database")?;
            run_migrations(&pool).await?;

            let store = PgUserStore::new(pool);
            let hasher = BcryptHasher::new(PasswordConfig::from_env()?.cost);
            let admin = create_admin(&store, &hasher, &name, &email, &password).await?;

            println!("✅ Admin created successfully!");
            println!("   Id: {}", admin.id);
            println!("   Email: {}", admin.email);
            println!("   Name: {}", admin.name);
            Ok(())
        }
    }
}
