use crate::payload::BirthChartRequest;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use urania::chart::BirthSubject;
use urania::error::ProviderError;
use urania::source::ChartProvider;
use urania_config::ProviderSettings;

/// HTTP client for the Astrologer v4 birth-chart endpoint.
pub struct AstrologerClient {
    http: Client,
    settings: ProviderSettings,
    api_key: Option<String>,
}

impl AstrologerClient {
    pub fn new(settings: ProviderSettings, api_key: Option<String>) -> Result<Self, ProviderError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| ProviderError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            settings,
            api_key: api_key.filter(|key| !key.is_empty()),
        })
    }

    /// Key taken from the environment variable named in the settings.
    pub fn from_env(settings: ProviderSettings) -> Result<Self, ProviderError> {
        let api_key = settings.api_key();
        Self::new(settings, api_key)
    }
}

#[async_trait]
impl ChartProvider for AstrologerClient {
    fn name(&self) -> &str {
        "astrologer"
    }

    fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    async fn fetch_chart(&self, subject: &BirthSubject) -> Result<Value, ProviderError> {
        let api_key = self.api_key.as_deref().ok_or(ProviderError::MissingCredential)?;
        let request = BirthChartRequest::new(subject, &self.settings);
        log::debug!(
            "Astrologer request: {}",
            serde_json::to_string(&request).unwrap_or_default()
        );

        let response = self
            .http
            .post(&self.settings.endpoint)
            .header("X-RapidAPI-Key", api_key)
            .header("X-RapidAPI-Host", &self.settings.host)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("Astrologer returned {}: {}", status, body);
            return Err(ProviderError::from_status(status.as_u16(), body));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;
        log::debug!("Astrologer response: {}", payload);
        Ok(payload)
    }
}
