//! Server configuration from command-line flags and environment variables.

use std::time::Duration;

use clap::Parser;

use crate::infrastructure::provider::{TwilioConfig, twilio::DEFAULT_BASE_URL};

/// Room status server
#[derive(Debug, Clone, Parser)]
#[command(name = "roomwatch-server", version, about)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "ROOMWATCH_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind
    #[arg(long, env = "ROOMWATCH_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Twilio Account SID
    #[arg(long, env = "TWILIO_ACCOUNT_SID")]
    pub twilio_account_sid: String,

    /// Twilio API Key SID; the Account SID is used when omitted
    #[arg(long, env = "TWILIO_API_KEY")]
    pub twilio_api_key: Option<String>,

    /// Twilio Auth Token, or the API Key Secret when an API key is given
    #[arg(long, env = "TWILIO_AUTH_TOKEN", hide_env_values = true)]
    pub twilio_api_secret: String,

    /// Twilio Video API base URL
    #[arg(long, env = "TWILIO_VIDEO_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub twilio_base_url: String,

    /// Timeout for each provider request, in seconds
    #[arg(long, env = "ROOMWATCH_PROVIDER_TIMEOUT_SECS", default_value_t = 10)]
    pub provider_timeout_secs: u64,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn twilio_config(&self) -> TwilioConfig {
        TwilioConfig {
            base_url: self.twilio_base_url.clone(),
            username: self
                .twilio_api_key
                .clone()
                .unwrap_or_else(|| self.twilio_account_sid.clone()),
            password: self.twilio_api_secret.clone(),
            timeout: Duration::from_secs(self.provider_timeout_secs),
        }
    }
}
