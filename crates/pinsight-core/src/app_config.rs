use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    pub fixtures_dir: PathBuf,
    pub output_dir: PathBuf,
    pub log_level: String,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub generative_timeout_secs: u64,
    pub instagram_access_token: Option<String>,
    pub instagram_account_id: Option<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("fixtures_dir", &self.fixtures_dir)
            .field("output_dir", &self.output_dir)
            .field("log_level", &self.log_level)
            .field(
                "openai_api_key",
                &self.openai_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("openai_model", &self.openai_model)
            .field("openai_base_url", &self.openai_base_url)
            .field("generative_timeout_secs", &self.generative_timeout_secs)
            .field(
                "instagram_access_token",
                &self.instagram_access_token.as_ref().map(|_| "[redacted]"),
            )
            .field("instagram_account_id", &self.instagram_account_id)
            .finish()
    }
}
