/// Settings for the storefront HTTP client.
///
/// Split from [`AppConfig`] so the one-shot `lookup` command can run without a
/// bot token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

#[derive(Clone)]
pub struct AppConfig {
    pub discord_token: String,
    pub command_prefix: String,
    pub log_level: String,
    pub http: HttpConfig,
    pub selection_timeout_secs: u64,
    pub collection_display_limit: usize,
    pub embed_footer: Option<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("discord_token", &"[redacted]")
            .field("command_prefix", &self.command_prefix)
            .field("log_level", &self.log_level)
            .field("http", &self.http)
            .field("selection_timeout_secs", &self.selection_timeout_secs)
            .field("collection_display_limit", &self.collection_display_limit)
            .field("embed_footer", &self.embed_footer)
            .finish()
    }
}
