//! Where chart data comes from.
//!
//! A chart is built either from a live provider payload or from the
//! deterministic fallback. The choice is made here, once, and handed to the
//! assembler as a tagged value; provider failures never cross this boundary
//! as errors.

use crate::chart::BirthSubject;
use crate::error::ProviderError;
use async_trait::async_trait;
use log::{debug, info, warn};
use serde_json::Value;

/// An external birth-chart data provider.
#[async_trait]
pub trait ChartProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Whether a credential is configured. Providers without one are never called.
    fn has_credential(&self) -> bool;

    /// Fetch the raw chart payload for a subject.
    async fn fetch_chart(&self, subject: &BirthSubject) -> Result<Value, ProviderError>;
}

/// Why demo data replaced provider output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    MissingCredential,
    Unauthorized,
    RateLimited,
    ProviderFailure { status: Option<u16>, detail: String },
    Processing(String),
}

impl FallbackReason {
    /// User-facing notice attached to the demo chart.
    pub fn warning(&self) -> &'static str {
        match self {
            FallbackReason::MissingCredential => {
                "No provider API key configured. Showing demo data."
            }
            FallbackReason::Unauthorized => {
                "Invalid provider API key. Showing demo data; configure a valid RapidAPI key."
            }
            FallbackReason::RateLimited => "Provider rate limit exceeded. Showing demo data.",
            FallbackReason::ProviderFailure { .. } => {
                "Birth-chart provider error. Showing demo data."
            }
            FallbackReason::Processing(_) => "Chart processing failed. Showing demo data.",
        }
    }
}

impl From<ProviderError> for FallbackReason {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::MissingCredential => FallbackReason::MissingCredential,
            ProviderError::Unauthorized => FallbackReason::Unauthorized,
            ProviderError::RateLimited => FallbackReason::RateLimited,
            ProviderError::Status { code, body } => FallbackReason::ProviderFailure {
                status: Some(code),
                detail: body,
            },
            ProviderError::Transport(detail) => FallbackReason::ProviderFailure {
                status: None,
                detail,
            },
            ProviderError::Decode(detail) => FallbackReason::Processing(detail),
        }
    }
}

/// Tagged chart source handed to the assembler.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSource {
    LiveProvider(Value),
    DeterministicFallback(FallbackReason),
}

/// Call the provider when it is usable, otherwise select the fallback.
pub async fn resolve_source(
    provider: Option<&dyn ChartProvider>,
    subject: &BirthSubject,
) -> ChartSource {
    let provider = match provider {
        Some(provider) if provider.has_credential() => provider,
        _ => {
            warn!("No chart provider credential configured, using demo data");
            return ChartSource::DeterministicFallback(FallbackReason::MissingCredential);
        }
    };

    info!("Requesting birth chart from {}", provider.name());
    debug!("Birth chart subject: {} ({})", subject.name, subject.date);
    match provider.fetch_chart(subject).await {
        Ok(payload) => ChartSource::LiveProvider(payload),
        Err(err) => {
            warn!("Chart provider {} failed: {}", provider.name(), err);
            ChartSource::DeterministicFallback(err.into())
        }
    }
}
