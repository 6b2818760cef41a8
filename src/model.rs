// Wire types for the /analyze-comparison service and response normalization
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{Result, SentiError};

/// Request body for the comparison endpoint. Exactly one of the two fields
/// carries content, depending on the active input mode; the other is sent
/// as an empty string.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRequest {
    pub text: String,
    #[serde(rename = "fileContent")]
    pub file_content: String,
}

impl AnalysisRequest {
    pub fn typed(content: &str) -> Self {
        Self {
            text: content.to_string(),
            file_content: String::new(),
        }
    }

    pub fn from_file(content: &str) -> Self {
        Self {
            text: String::new(),
            file_content: content.to_string(),
        }
    }
}

/// VADER lexicon scores. Fractions in [0,1]; the service does not guarantee
/// they sum to 1 and we do not enforce it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VaderScores {
    pub pos: f64,
    pub neu: f64,
    pub neg: f64,
    pub compound: f64,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HuggingFaceResult {
    pub sentiment: Sentiment,
    pub polarity: f64,
    pub response: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisResult {
    pub input: String,
    pub vader: VaderScores,
    pub huggingface: HuggingFaceResult,
}

/// The service sometimes wraps its result in a single-element array and
/// sometimes returns the object bare. Normalize both shapes to one typed
/// result; anything else (empty array, missing fields) is a shape error
/// caught here, before any renderer sees the value.
pub fn normalize_response(value: Value) -> Result<AnalysisResult> {
    let object = match value {
        Value::Array(mut items) => {
            if items.is_empty() {
                return Err(SentiError::ResponseShape("empty result array".into()));
            }
            items.swap_remove(0)
        }
        other => other,
    };
    serde_json::from_value(object).map_err(|e| SentiError::ResponseShape(e.to_string()))
}

/// Shorten the model's free-text response to its first two sentence
/// fragments, matching the "Generated Summary" the original UI showed.
pub fn summary_of(response: &str) -> String {
    let fragments: Vec<&str> = response
        .split('.')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .take(2)
        .collect();
    let mut summary = fragments.join(". ");
    summary.push('.');
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_object(input: &str) -> Value {
        json!({
            "input": input,
            "vader": { "pos": 0.2, "neu": 0.5, "neg": 0.3, "compound": 0.1 },
            "huggingface": {
                "sentiment": "Neutral",
                "polarity": 0.05,
                "response": "Mixed signals. Hard to say. More data needed."
            }
        })
    }

    #[test]
    fn bare_object_passes_through() {
        let result = normalize_response(sample_object("hello")).unwrap();
        assert_eq!(result.input, "hello");
        assert_eq!(result.vader.neu, 0.5);
    }

    #[test]
    fn array_normalizes_to_first_element() {
        let value = json!([sample_object("a"), sample_object("b")]);
        let result = normalize_response(value).unwrap();
        assert_eq!(result.input, "a");
    }

    #[test]
    fn empty_array_is_a_shape_error() {
        let err = normalize_response(json!([])).unwrap_err();
        assert!(matches!(err, SentiError::ResponseShape(_)));
    }

    #[test]
    fn missing_nested_field_is_a_shape_error() {
        let value = json!({ "input": "x", "vader": { "pos": 0.1, "neu": 0.8, "neg": 0.1, "compound": 0.0 } });
        let err = normalize_response(value).unwrap_err();
        assert!(matches!(err, SentiError::ResponseShape(_)));
    }

    #[test]
    fn unknown_sentiment_label_is_rejected() {
        let mut value = sample_object("x");
        value["huggingface"]["sentiment"] = json!("Ecstatic");
        assert!(normalize_response(value).is_err());
    }

    #[test]
    fn summary_takes_first_two_fragments() {
        let summary = summary_of("Good news. Things improved. Details omitted.");
        assert_eq!(summary, "Good news. Things improved.");
    }

    #[test]
    fn summary_of_short_response_keeps_it_whole() {
        assert_eq!(summary_of("Terse"), "Terse.");
    }

    #[test]
    fn summary_skips_leading_empty_fragments() {
        assert_eq!(summary_of(". Great start. More later."), "Great start. More later.");
    }

    #[test]
    fn request_serializes_with_camel_case_file_field() {
        let body = serde_json::to_value(AnalysisRequest::from_file("abc")).unwrap();
        assert_eq!(body["fileContent"], "abc");
        assert_eq!(body["text"], "");
    }
}
