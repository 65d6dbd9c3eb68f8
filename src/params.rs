use anyhow::Context as _;
use reactgate::collector::CollectOptions;
use serde::Deserialize;
use std::time::Duration;

/// Default command that starts a collection
fn default_collect_command() -> String {
    "!collect".to_string()
}

/// Default collection time in seconds
fn default_collect_time() -> u64 {
    60
}

/// Default number of shards
fn default_shard_count() -> u32 {
    1
}

/// Default HTTP request timeout in seconds
fn default_http_timeout() -> u64 {
    30
}

#[derive(Deserialize, Clone)]
pub struct Params {
    pub discord_token: String,

    // Collection Configuration
    #[serde(default = "default_collect_command")]
    pub collect_command: String,
    /// Seconds until a collection stops on its own (0 disables the time limit)
    #[serde(default = "default_collect_time")]
    pub collect_time: u64,
    #[serde(default)]
    pub collect_max_matches: Option<usize>,

    // Gateway Configuration
    #[serde(default = "default_shard_count")]
    pub shard_count: u32,

    // HTTP Forwarding Configuration
    #[serde(default)]
    pub http_endpoint: Option<String>,
    #[serde(default = "default_http_timeout")]
    pub http_timeout: u64,
    #[serde(default)]
    pub insecure_mode: bool,
}

/// Mask sensitive strings by showing only first and last few characters
fn mask_token(s: &str) -> String {
    const VISIBLE_CHARS: usize = 4;

    if s.len() <= VISIBLE_CHARS * 2 {
        // If string is too short, mask everything except first char
        if s.is_empty() {
            return "<empty>".to_string();
        }
        return format!("{}***", &s[..1]);
    }

    format!(
        "{}***{}",
        &s[..VISIBLE_CHARS],
        &s[s.len() - VISIBLE_CHARS..]
    )
}

impl std::fmt::Debug for Params {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Params")
            .field("discord_token", &mask_token(&self.discord_token))
            .field("collect_command", &self.collect_command)
            .field("collect_time", &self.collect_time)
            .field("collect_max_matches", &self.collect_max_matches)
            .field("shard_count", &self.shard_count)
            .field("http_endpoint", &self.http_endpoint)
            .field("http_timeout", &self.http_timeout)
            .field("insecure_mode", &self.insecure_mode)
            .finish()
    }
}

impl Params {
    pub fn new() -> anyhow::Result<Params> {
        let params = envy::from_env::<Params>().context("Failed to load configuration")?;
        params.validate()?;
        Ok(params)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.shard_count == 0 {
            anyhow::bail!("SHARD_COUNT must be at least 1");
        }
        if self.collect_max_matches == Some(0) {
            anyhow::bail!("COLLECT_MAX_MATCHES must be at least 1");
        }
        if self.collect_time == 0 && self.collect_max_matches.is_none() {
            anyhow::bail!("COLLECT_TIME=0 requires COLLECT_MAX_MATCHES, or collections never end");
        }
        if self.collect_command.trim().is_empty() {
            anyhow::bail!("COLLECT_COMMAND must not be empty");
        }
        Ok(())
    }

    /// Limits applied to every collection
    pub fn collect_options(&self) -> CollectOptions {
        CollectOptions {
            time: (self.collect_time > 0).then(|| Duration::from_secs(self.collect_time)),
            max_matches: self.collect_max_matches,
        }
    }
}
