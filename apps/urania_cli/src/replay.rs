use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;
use urania::chart::BirthSubject;
use urania::error::ProviderError;
use urania::source::ChartProvider;

/// Serves a recorded provider response from disk instead of calling the API.
pub struct ReplayProvider {
    path: PathBuf,
}

impl ReplayProvider {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl ChartProvider for ReplayProvider {
    fn name(&self) -> &str {
        "replay"
    }

    fn has_credential(&self) -> bool {
        true
    }

    async fn fetch_chart(&self, _subject: &BirthSubject) -> Result<Value, ProviderError> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| ProviderError::Transport(format!("{}: {e}", self.path.display())))?;
        serde_json::from_str(&text).map_err(|e| ProviderError::Decode(e.to_string()))
    }
}
