//! Application setup and runtime.

use crate::{
  db, http,
  mail::{MailSender, SmtpMailer},
  store::ContactStore,
};
use sqlx::sqlite::SqlitePoolOptions;
use std::{net::SocketAddr, sync::Arc};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

/// Runtime configuration collected from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
  pub smtp_host: String,
  pub smtp_port: u16,
  pub smtp_user: String,
  pub smtp_pass: String,
  pub port: u16,
  pub database_url: String,
}

impl Config {
  pub fn from_env() -> Self {
    Config {
      smtp_host: env_or("SMTP_HOST", "smtp.gmail.com"),
      smtp_port: env_or("SMTP_PORT", "587").parse().unwrap_or(587),
      smtp_user: std::env::var("EMAIL_USER").unwrap_or_default(),
      smtp_pass: std::env::var("EMAIL_PASS").unwrap_or_default(),
      port: env_or("PORT", "5000").parse().unwrap_or(5000),
      database_url: env_or("MAILFORM_DATABASE", "sqlite://mailform.db"),
    }
  }
}

fn env_or(key: &str, default: &str) -> String {
  std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Shared application state handed to every request.
#[derive(Clone)]
pub struct AppState {
  pub store: ContactStore,
  pub mailer: Arc<dyn MailSender>,
}

/// Initialize pretty CLI logging.
pub fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  fmt()
    .with_env_filter(filter)
    .with_target(false)
    .pretty()
    .init();
}

/// Start the HTTP server with configured environment.
pub async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
  init_tracing();

  let config = Config::from_env();

  let db_url = db::ensure_sqlite_path(&config.database_url);
  let pool = SqlitePoolOptions::new()
    .max_connections(5)
    .connect(&db_url)
    .await?;
  db::run_migrations(&pool).await?;

  let mailer = SmtpMailer::new(&config)?;
  let state = AppState {
    store: ContactStore::new(pool),
    mailer: Arc::new(mailer),
  };

  let app = http::build_router(state);

  let addr: SocketAddr = ([0, 0, 0, 0], config.port).into();
  info!("contact endpoint: POST http://{}{}/", addr, http::ROUTE_PREFIX);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;
  Ok(())
}
