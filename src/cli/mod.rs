use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    // --- Server Args ---
    /// Port for the HTTP API server
    #[arg(long, env = "PORT", default_value = "5000")]
    pub port: u16,

    /// Enable TLS for the HTTP server
    #[arg(long, env = "ENABLE_TLS", default_value = "false")]
    pub enable_tls: bool,

    /// Path to the TLS certificate file (PEM)
    #[arg(long, env = "TLS_CERT_PATH")]
    pub tls_cert_path: Option<String>,

    /// Path to the TLS private key file (PEM)
    #[arg(long, env = "TLS_KEY_PATH")]
    pub tls_key_path: Option<String>,

    // --- Upstream Completion API Args ---
    /// API key for the Groq completion API. Startup proceeds without it, but
    /// conversion endpoints fail until it is set.
    #[arg(long, env = "GROQ_API_KEY")]
    pub api_key: Option<String>,

    /// Chat-completions endpoint of the upstream completion API
    #[arg(
        long,
        env = "UPSTREAM_URL",
        default_value = "https://api.groq.com/openai/v1/chat/completions"
    )]
    pub upstream_url: String,

    /// Model used for conversion and explanation requests
    #[arg(long, env = "UPSTREAM_MODEL", default_value = "llama3-8b-8192")]
    pub model: String,

    /// Sampling temperature for completion requests
    #[arg(long, env = "UPSTREAM_TEMPERATURE", default_value = "0.2")]
    pub temperature: f32,

    /// Maximum number of tokens the upstream model may generate
    #[arg(long, env = "UPSTREAM_MAX_TOKENS", default_value = "4000")]
    pub max_tokens: u32,
}
