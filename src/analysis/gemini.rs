//! Gemini client for freight analysis.

use super::{AnalysisRequest, FreightAnalysis, build_prompt, parse_generate_content, response_schema};
use crate::{
    config::settings::AnalysisSettings,
    errors::{Error, Result},
};
use serde_json::json;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Environment variable holding the Gemini API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Header carrying the API key. The key must stay out of the request URL, which
/// `reqwest` errors print.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Calls the Gemini `generateContent` endpoint with a fixed JSON response schema.
pub struct GeminiAnalyzer {
    client: reqwest::Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl GeminiAnalyzer {
    /// Creates a client with the configured timeout.
    pub fn new(api_key: String, settings: &AnalysisSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key,
            model: settings.model.clone(),
            endpoint: settings.endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a client when analysis is enabled and `GEMINI_API_KEY` is set.
    ///
    /// Returns `Ok(None)` otherwise; the rest of the application works without it.
    pub fn from_env(settings: &AnalysisSettings) -> Result<Option<Self>> {
        if !settings.enabled {
            info!("AI analysis disabled in settings");
            return Ok(None);
        }

        match std::env::var(API_KEY_VAR) {
            Ok(key) if !key.trim().is_empty() => Self::new(key, settings).map(Some),
            _ => {
                info!("{} not set, AI analysis unavailable", API_KEY_VAR);
                Ok(None)
            }
        }
    }

    /// Requests an analysis. Any failure is logged and yields `None`.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Option<FreightAnalysis> {
        match self.request_analysis(request).await {
            Ok(analysis) => {
                info!(
                    "Freight analysis: {} (score {})",
                    analysis.verdict, analysis.score
                );
                Some(analysis)
            }
            Err(e) => {
                warn!("Freight analysis unavailable: {}", e);
                None
            }
        }
    }

    fn build_request(&self, request: &AnalysisRequest) -> Result<reqwest::Request> {
        let url = format!("{}/models/{}:generateContent", self.endpoint, self.model);
        let body = json!({
            "contents": [{ "parts": [{ "text": build_prompt(request) }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema()
            }
        });

        Ok(self
            .client
            .post(&url)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(&body)
            .build()?)
    }

    #[instrument(skip(self, request), fields(model = %self.model, origin = %request.origin, destination = %request.destination))]
    async fn request_analysis(&self, request: &AnalysisRequest) -> Result<FreightAnalysis> {
        let response = self.client.execute(self.build_request(request)?).await?;

        let status = response.status();
        debug!("Gemini response status: {}", status);
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(Error::Analysis {
                message: format!("Gemini returned {status}: {error_text}"),
            });
        }

        let text = response.text().await?;
        parse_generate_content(&text)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::sample_draft;

    fn settings(endpoint: &str) -> AnalysisSettings {
        AnalysisSettings {
            enabled: true,
            model: "test-model".to_string(),
            endpoint: endpoint.to_string(),
            timeout_secs: 2,
        }
    }

    #[test]
    fn test_new_trims_endpoint() {
        let analyzer = GeminiAnalyzer::new("key".to_string(), &settings("http://localhost/v1/")).unwrap();
        assert_eq!(analyzer.endpoint, "http://localhost/v1");
        assert_eq!(analyzer.model, "test-model");
    }

    #[test]
    fn test_disabled_settings_yield_no_analyzer() {
        let disabled = AnalysisSettings {
            enabled: false,
            ..settings("http://localhost")
        };
        assert!(GeminiAnalyzer::from_env(&disabled).unwrap().is_none());
    }

    #[test]
    fn test_api_key_sent_as_header_not_in_url() {
        let analyzer =
            GeminiAnalyzer::new("SECRET-KEY".to_string(), &settings("http://localhost/v1")).unwrap();
        let request = analyzer
            .build_request(&AnalysisRequest::from_draft(&sample_draft()))
            .unwrap();

        assert_eq!(
            request.url().as_str(),
            "http://localhost/v1/models/test-model:generateContent"
        );
        assert_eq!(request.headers()[API_KEY_HEADER], "SECRET-KEY");
    }

    #[tokio::test]
    async fn test_transport_error_does_not_expose_key() {
        let analyzer =
            GeminiAnalyzer::new("SECRET-KEY".to_string(), &settings("http://127.0.0.1:9")).unwrap();
        let request = AnalysisRequest::from_draft(&sample_draft());

        let error = analyzer.request_analysis(&request).await.unwrap_err();
        assert!(matches!(error, Error::Http(_)));
        assert!(!error.to_string().contains("SECRET-KEY"));
    }

    #[tokio::test]
    async fn test_unreachable_service_yields_none() {
        // Nothing listens on the discard port locally, so the request fails fast.
        let analyzer = GeminiAnalyzer::new("key".to_string(), &settings("http://127.0.0.1:9")).unwrap();
        let request = AnalysisRequest::from_draft(&sample_draft());
        assert!(analyzer.analyze(&request).await.is_none());
    }
}
