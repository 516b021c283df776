use anyhow::{bail, Context};
use clap::Parser;

use sentiment_api::auth::password::{
    hash_password, validate_password_strength, MIN_PASSWORD_LENGTH,
};
use sentiment_db::models::account::CreateAccount;
use sentiment_db::repositories::AccountRepo;

/// Provision a login account for `POST /token`.
#[derive(Parser, Debug)]
#[command(name = "sentiment-create-user", version, about, long_about = None)]
struct Cli {
    /// Login name. Must be unique.
    #[arg(long)]
    username: String,

    /// Plaintext password, hashed with Argon2id before storage.
    #[arg(long, env = "NEW_USER_PASSWORD", hide_env_values = true)]
    password: String,

    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let username = cli.username.trim();
    if username.is_empty() {
        bail!("username must not be empty");
    }
    validate_password_strength(&cli.password, MIN_PASSWORD_LENGTH).map_err(anyhow::Error::msg)?;

    let pool = sentiment_db::create_pool(&cli.database_url, 1)
        .await
        .context("Failed to connect to database")?;
    sentiment_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    if AccountRepo::find_by_username(&pool, username).await?.is_some() {
        bail!("username '{username}' is already taken");
    }

    let password_hash = hash_password(&cli.password)
        .map_err(|e| anyhow::anyhow!("Password hashing failed: {e}"))?;

    let account = AccountRepo::create(
        &pool,
        &CreateAccount {
            username: username.to_string(),
            password_hash,
        },
    )
    .await
    .context("Failed to create account")?;

    println!("Created account '{}' with id {}", account.username, account.id);
    Ok(())
}
