use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};

pub fn analyze_route() -> &'static str {
    "/analyze"
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub code: String,
}

impl AnalyzeRequest {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

/// Report document returned by the analysis service for one submission.
///
/// Required fields are decoded strictly: a body missing any of them is a
/// malformed response. `invariants` and `assumptions` keep the distinction
/// between "absent" (`None`) and "present but empty". The remaining optional
/// fields are decoded leniently, so a value of an unexpected type reads as
/// absent instead of failing the whole document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub metadata: CodeMetadata,
    pub explanation: Explanation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeMetadata {
    pub function_name: String,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub args: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    pub correctness_argument: String,
    pub complexity: Complexity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invariants: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assumptions: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub goal: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub termination_argument: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub edge_cases: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub note: Option<String>,
}

impl Explanation {
    pub fn invariants(&self) -> &[String] {
        self.invariants.as_deref().unwrap_or_default()
    }

    pub fn assumptions(&self) -> &[String] {
        self.assumptions.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Complexity {
    pub time: String,
    pub space: String,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample() -> serde_json::Value {
        json!({
            "metadata": { "function_name": "f" },
            "explanation": {
                "correctness_argument": "trivial",
                "complexity": { "time": "O(1)", "space": "O(1)" },
                "invariants": [],
                "assumptions": ["n is an integer"]
            }
        })
    }

    #[test]
    fn decodes_sample_document() {
        let result: VerificationResult = serde_json::from_value(sample()).expect("decode");
        assert_eq!(result.metadata.function_name, "f");
        assert_eq!(result.explanation.complexity.time, "O(1)");
        assert_eq!(result.explanation.invariants, Some(Vec::new()));
        assert_eq!(
            result.explanation.assumptions(),
            ["n is an integer".to_string()]
        );
        assert!(result.explanation.goal.is_none());
    }

    #[test]
    fn absent_and_null_lists_decode_as_none() {
        let mut doc = sample();
        doc["explanation"]
            .as_object_mut()
            .expect("object")
            .remove("invariants");
        doc["explanation"]["assumptions"] = serde_json::Value::Null;

        let result: VerificationResult = serde_json::from_value(doc).expect("decode");
        assert_eq!(result.explanation.invariants, None);
        assert_eq!(result.explanation.assumptions, None);
        assert!(result.explanation.invariants().is_empty());
    }

    #[test]
    fn ignores_fields_the_client_does_not_model() {
        let mut doc = sample();
        doc["metadata"]["loops"] = json!([{ "type": "for_loop", "line_start": 2 }]);
        doc["explanation"]["argument_types"] = json!({ "n": { "type": "int" } });
        doc["explanation"]["error_info"] = json!("");

        let result: VerificationResult = serde_json::from_value(doc).expect("decode");
        assert_eq!(result.metadata.function_name, "f");
    }

    #[test]
    fn mistyped_supplementary_fields_read_as_absent() {
        let mut doc = sample();
        doc["metadata"]["args"] = json!("n");
        doc["explanation"]["goal"] = json!({ "text": "identity" });
        doc["explanation"]["edge_cases"] = json!(["n == 0", 3]);
        doc["explanation"]["termination_argument"] = json!("no loops");

        let result: VerificationResult = serde_json::from_value(doc).expect("decode");
        assert_eq!(result.metadata.args, None);
        assert_eq!(result.explanation.goal, None);
        assert_eq!(result.explanation.edge_cases, None);
        assert_eq!(
            result.explanation.termination_argument.as_deref(),
            Some("no loops")
        );
    }

    #[test]
    fn missing_complexity_is_rejected() {
        let mut doc = sample();
        doc["explanation"]
            .as_object_mut()
            .expect("object")
            .remove("complexity");

        assert!(serde_json::from_value::<VerificationResult>(doc).is_err());
    }

    #[test]
    fn mistyped_invariants_are_rejected() {
        let mut doc = sample();
        doc["explanation"]["invariants"] = json!("x > 0");

        assert!(serde_json::from_value::<VerificationResult>(doc).is_err());
    }

    #[test]
    fn request_body_is_a_code_object() {
        let body = serde_json::to_value(AnalyzeRequest::new("def f(n): return n")).expect("encode");
        assert_eq!(body, json!({ "code": "def f(n): return n" }));
    }
}
