use std::time::Duration;

use clap::Parser;
use ferriskitchen_core::domain::common::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, KitchenConfig, LLMConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "ferriskitchen", version, about = "FerrisKitchen recipe generation API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(
        long = "gemini-api-key",
        env = "GEMINI_API_KEY",
        hide_env_values = true,
        required_unless_present = "api_key"
    )]
    pub gemini_api_key: Option<String>,

    /// Fallback for deployments that only set `API_KEY`
    #[arg(long = "api-key", env = "API_KEY", hide_env_values = true, hide = true)]
    pub api_key: Option<String>,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    #[arg(
        long = "gemini-base-url",
        env = "GEMINI_BASE_URL",
        default_value = DEFAULT_GEMINI_BASE_URL
    )]
    pub gemini_base_url: String,

    /// Request timeout in seconds; no timeout when unset
    #[arg(long = "llm-timeout-seconds", env = "LLM_TIMEOUT_SECONDS")]
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl LlmArgs {
    /// `GEMINI_API_KEY` wins over `API_KEY`; clap guarantees one of them is set.
    pub fn resolved_api_key(&self) -> String {
        self.gemini_api_key
            .clone()
            .or_else(|| self.api_key.clone())
            .unwrap_or_default()
    }
}

impl From<Args> for KitchenConfig {
    fn from(args: Args) -> Self {
        KitchenConfig {
            llm: LLMConfig {
                gemini_api_key: args.llm.resolved_api_key(),
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
                request_timeout: args.llm.timeout_seconds.map(Duration::from_secs),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_conversion() {
        let args = Args::parse_from([
            "ferriskitchen",
            "--gemini-api-key",
            "secret",
            "--llm-timeout-seconds",
            "30",
            "--allowed-origins",
            "http://a.test,http://b.test",
        ]);

        assert_eq!(args.server.port, 3333);
        assert_eq!(
            args.server.allowed_origins,
            ["http://a.test", "http://b.test"]
        );

        let config = KitchenConfig::from(args);
        assert_eq!(config.llm.gemini_api_key, "secret");
        assert_eq!(config.llm.request_timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_api_key_fallback() {
        let args = Args::parse_from(["ferriskitchen", "--api-key", "legacy"]);
        assert_eq!(KitchenConfig::from(args).llm.gemini_api_key, "legacy");
    }

    #[test]
    fn test_gemini_api_key_takes_precedence() {
        let args = Args::parse_from([
            "ferriskitchen",
            "--gemini-api-key",
            "primary",
            "--api-key",
            "legacy",
        ]);
        assert_eq!(args.llm.resolved_api_key(), "primary");
    }
}
