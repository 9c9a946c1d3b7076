//! Outbound mail delivery over SMTP.

use crate::app::Config;
use async_trait::async_trait;
use lettre::{
  AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
  message::header::ContentType,
  transport::smtp::authentication::Credentials,
};
use tracing::info;

/// Boundary for outbound email so tests can substitute a fake.
#[async_trait]
pub trait MailSender: Send + Sync {
  async fn send(&self, recipient: &str, subject: &str, body: &str) -> anyhow::Result<()>;
}

/// Lettre-backed sender. The `From` address is the configured account identity.
pub struct SmtpMailer {
  transport: AsyncSmtpTransport<Tokio1Executor>,
  from: String,
}

impl SmtpMailer {
  /// Build a transport from configuration. Without credentials this falls
  /// back to an unauthenticated connection (local catchers like MailDev);
  /// with them it uses an authenticated STARTTLS relay.
  pub fn new(config: &Config) -> anyhow::Result<Self> {
    let transport = if config.smtp_user.is_empty() || config.smtp_pass.is_empty() {
      info!(
        "smtp credentials not set, using unauthenticated connection to {}:{}",
        config.smtp_host, config.smtp_port
      );
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
        .port(config.smtp_port)
        .build()
    } else {
      let creds = Credentials::new(config.smtp_user.clone(), config.smtp_pass.clone());
      AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
        .port(config.smtp_port)
        .credentials(creds)
        .build()
    };

    let from = if config.smtp_user.is_empty() {
      "mailform@localhost".to_string()
    } else {
      config.smtp_user.clone()
    };

    Ok(SmtpMailer { transport, from })
  }
}

#[async_trait]
impl MailSender for SmtpMailer {
  async fn send(&self, recipient: &str, subject: &str, body: &str) -> anyhow::Result<()> {
    let email = Message::builder()
      .from(self.from.parse()?)
      .to(recipient.parse()?)
      .subject(subject)
      .header(ContentType::TEXT_PLAIN)
      .body(body.to_string())?;
    self.transport.send(email).await?;
    Ok(())
  }
}
