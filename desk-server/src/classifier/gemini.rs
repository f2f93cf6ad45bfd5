//! Gemini-backed classifier
//!
//! Talks to the generative-language REST API in JSON-response mode with a
//! fixed response schema, then parses and validates the candidate text.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::models::{Category, Priority, TriageSuggestion};

use super::{ClassifierError, ClassifierResult, ComplaintClassifier};
use crate::core::Config;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Classifier gateway backed by the Gemini generateContent endpoint
#[derive(Debug, Clone)]
pub struct GeminiClassifier {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClassifier {
    /// Build the gateway from server config
    ///
    /// An empty API key produces a gateway that always reports
    /// [`ClassifierError::NotConfigured`].
    pub fn from_config(config: &Config) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(config.classifier_timeout_ms))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.classifier_base_url.trim_end_matches('/').to_string(),
            model: config.classifier_model.clone(),
            api_key: config.gemini_api_key.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl ComplaintClassifier for GeminiClassifier {
    async fn classify(&self, description: &str) -> ClassifierResult<TriageSuggestion> {
        if self.api_key.is_empty() {
            return Err(ClassifierError::NotConfigured);
        }

        let request = GenerateRequest::for_complaint(description);

        tracing::debug!(model = %self.model, "Requesting classification");

        let resp = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ClassifierError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ClassifierError::ServiceStatus(status.as_u16()));
        }

        let body: GenerateResponse = resp
            .json()
            .await
            .map_err(|e| ClassifierError::MalformedResponse(e.to_string()))?;

        let text = body
            .candidate_text()
            .ok_or_else(|| ClassifierError::MalformedResponse("missing candidate text".into()))?;

        parse_suggestion(&text)
    }
}

/// Parse the candidate text as a validated suggestion
///
/// Pure function: identical text always yields an identical result.
fn parse_suggestion(text: &str) -> ClassifierResult<TriageSuggestion> {
    let wire: WireSuggestion = serde_json::from_str(text.trim())
        .map_err(|e| ClassifierError::MalformedResponse(e.to_string()))?;

    let category = Category::try_from(wire.category.as_str())
        .map_err(|e| ClassifierError::InvalidSuggestion(e.to_string()))?;
    let priority = Priority::try_from(wire.priority.as_str())
        .map_err(|e| ClassifierError::InvalidSuggestion(e.to_string()))?;

    Ok(TriageSuggestion {
        category,
        priority,
        summary: wire.summary,
    })
}

/// Suggestion as it appears in the candidate text, before enum validation
#[derive(Debug, Deserialize)]
struct WireSuggestion {
    category: String,
    priority: String,
    summary: String,
}

// ===== generateContent wire types =====

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateRequest {
    fn for_complaint(description: &str) -> Self {
        let prompt = format!(
            "Analyze the following apartment maintenance complaint and suggest the best Category and Priority.\nComplaint: \"{}\"\n\nReturn JSON with fields: category, priority, and a short summary.",
            description
        );

        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: serde_json::json!({
                    "type": "OBJECT",
                    "properties": {
                        "category": {
                            "type": "STRING",
                            "description": "One of: ELECTRICAL, PLUMBING, CLEANING, LIFT, SECURITY, OTHER"
                        },
                        "priority": {
                            "type": "STRING",
                            "description": "One of: LOW, MEDIUM, HIGH, URGENT"
                        },
                        "summary": {
                            "type": "STRING",
                            "description": "A 5-word summary"
                        }
                    },
                    "required": ["category", "priority", "summary"]
                }),
            },
        }
    }
}

impl GenerateResponse {
    /// Text of the first candidate part, if any
    fn candidate_text(self) -> Option<String> {
        self.candidates?
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()
            .map(|p| p.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== 1. Suggestion parsing =====

    #[test]
    fn test_parse_valid_suggestion() {
        let text = r#"{"category":"PLUMBING","priority":"HIGH","summary":"Kitchen sink leak"}"#;
        let suggestion = parse_suggestion(text).unwrap();
        assert_eq!(suggestion.category, Category::Plumbing);
        assert_eq!(suggestion.priority, Priority::High);
        assert_eq!(suggestion.summary, "Kitchen sink leak");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let text = "\n  {\"category\":\"LIFT\",\"priority\":\"URGENT\",\"summary\":\"Lift stuck\"}  \n";
        let suggestion = parse_suggestion(text).unwrap();
        assert_eq!(suggestion.category, Category::Lift);
        assert_eq!(suggestion.priority, Priority::Urgent);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let text = r#"{"category":"CLEANING","priority":"LOW","summary":"Corridor needs sweeping"}"#;
        let first = parse_suggestion(text).unwrap();
        let second = parse_suggestion(text).unwrap();
        assert_eq!(first, second);
    }

    // ===== 2. Failure taxonomy =====

    #[test]
    fn test_parse_rejects_unknown_category() {
        let text = r#"{"category":"GARDENING","priority":"HIGH","summary":"Hedge overgrown"}"#;
        let err = parse_suggestion(text).unwrap_err();
        assert!(matches!(err, ClassifierError::InvalidSuggestion(_)));
        assert_eq!(err.kind(), "invalid_suggestion");
    }

    #[test]
    fn test_parse_rejects_unknown_priority() {
        let text = r#"{"category":"PLUMBING","priority":"CRITICAL","summary":"Burst pipe"}"#;
        let err = parse_suggestion(text).unwrap_err();
        assert!(matches!(err, ClassifierError::InvalidSuggestion(_)));
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let err = parse_suggestion("not json at all").unwrap_err();
        assert!(matches!(err, ClassifierError::MalformedResponse(_)));
        assert_eq!(err.kind(), "malformed_response");
    }

    #[test]
    fn test_parse_rejects_missing_fields() {
        let text = r#"{"category":"PLUMBING"}"#;
        let err = parse_suggestion(text).unwrap_err();
        assert!(matches!(err, ClassifierError::MalformedResponse(_)));
    }

    // ===== 3. Wire request shape =====

    #[test]
    fn test_request_embeds_description() {
        let request = GenerateRequest::for_complaint("Water leaking from kitchen sink");
        let json = serde_json::to_value(&request).unwrap();

        let prompt = json["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("Water leaking from kitchen sink"));
        assert!(prompt.contains("category, priority, and a short summary"));
    }

    #[test]
    fn test_request_uses_json_response_mode() {
        let request = GenerateRequest::for_complaint("Lights out");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json["generationConfig"]["responseMimeType"],
            "application/json"
        );
        let required = json["generationConfig"]["responseSchema"]["required"]
            .as_array()
            .unwrap();
        assert_eq!(required.len(), 3);
    }

    // ===== 4. Response extraction =====

    #[test]
    fn test_candidate_text_extraction() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"{\"a\":1}"}]}}]}"#;
        let resp: GenerateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.candidate_text().unwrap(), "{\"a\":1}");
    }

    #[test]
    fn test_candidate_text_missing() {
        let resp: GenerateResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(resp.candidate_text().is_none());

        let resp: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.candidate_text().is_none());
    }

    // ===== 5. Gateway configuration =====

    #[tokio::test]
    async fn test_unconfigured_gateway_reports_not_configured() {
        let config = Config {
            http_port: 0,
            environment: "development".into(),
            gemini_api_key: String::new(),
            classifier_base_url: "https://generativelanguage.googleapis.com".into(),
            classifier_model: "gemini-3-flash-preview".into(),
            classifier_timeout_ms: 15000,
            seed_demo_data: false,
        };

        let gateway = GeminiClassifier::from_config(&config);
        let err = gateway.classify("Lights flickering").await.unwrap_err();
        assert!(matches!(err, ClassifierError::NotConfigured));
        assert_eq!(err.kind(), "not_configured");
    }

    #[test]
    fn test_endpoint_joins_base_and_model() {
        let config = Config {
            http_port: 0,
            environment: "development".into(),
            gemini_api_key: "key".into(),
            classifier_base_url: "http://localhost:9090/".into(),
            classifier_model: "gemini-3-flash-preview".into(),
            classifier_timeout_ms: 15000,
            seed_demo_data: false,
        };

        let gateway = GeminiClassifier::from_config(&config);
        assert_eq!(
            gateway.endpoint(),
            "http://localhost:9090/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }
}
