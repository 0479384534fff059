//! Administrative commands run against the configured database.
//!
//! ```bash
//! jotter-admin migrate
//! jotter-admin create-superuser --email admin@example.com
//! ```

use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand};
use jotter_api::auth::password::hash_password;
use jotter_core::accounts::{validate_password_strength, MIN_PASSWORD_LENGTH};
use jotter_db::models::account::CreateAccount;
use jotter_db::repositories::AccountRepo;

#[derive(Parser)]
#[command(name = "jotter-admin")]
#[command(about = "Jotter administration utility", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,

    /// Create a staff + superuser account with the default categories
    CreateSuperuser {
        #[arg(long)]
        email: String,

        /// Read from the environment when not passed on the command line
        #[arg(long, env = "JOTTER_SUPERUSER_PASSWORD", hide_env_values = true)]
        password: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jotter_db=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = jotter_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Migrate => {
            jotter_db::run_migrations(&pool)
                .await
                .context("Failed to run database migrations")?;
            println!("Migrations applied.");
        }
        Commands::CreateSuperuser { email, password } => {
            validate_password_strength(&password, MIN_PASSWORD_LENGTH)
                .map_err(|msg| anyhow!("password: {msg}"))?;

            let password_hash =
                hash_password(&password).map_err(|e| anyhow!("Password hashing error: {e}"))?;
            let input = CreateAccount::new(&email, password_hash)?;

            if AccountRepo::find_by_email(&pool, &input.email).await?.is_some() {
                bail!("An account with email {} already exists", input.email);
            }

            let account = AccountRepo::create_superuser(&pool, &input).await?;
            println!("Superuser {} created (id {}).", account.email, account.id);
        }
    }

    pool.close().await;
    Ok(())
}
