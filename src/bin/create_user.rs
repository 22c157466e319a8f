use clap::Parser;
use restaurant_api::config::EnvConfig;
use restaurant_api::db::database_service::DatabaseService;
use restaurant_api::types::user::DBUserCreate;
use restaurant_api::utils::token::hash_password;
use std::process::ExitCode;
use tracing::error;

/// Provision a user that can log in to the API.
#[derive(Parser, Debug)]
#[command(name = "create-user", version)]
struct Args {
    #[arg(long)]
    username: String,
    #[arg(long, env = "RESTAURANT_API_PASSWORD", hide_env_values = true)]
    password: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args).await {
        Ok(id) => {
            println!("Created user {}", id);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("create-user failed: {}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<i32, Box<dyn std::error::Error>> {
    let config = EnvConfig::from_env()?;
    if args.username.trim().is_empty() || args.password.is_empty() {
        return Err("username and password must not be empty".into());
    }

    let db = DatabaseService::new(&config.db_url).await?;
    let password_hash = hash_password(&args.password).map_err(|e| e.to_string())?;
    let id = db
        .create_user(DBUserCreate { username: args.username.trim().to_string(), password_hash })
        .await?;
    Ok(id)
}
