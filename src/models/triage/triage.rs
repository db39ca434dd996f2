use serde::Serialize;
use serde_json::Value;

use crate::models::PatientId;

/// Body of `POST /triage_chain` and `POST /triage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriageRequest {
    pub patient_id: PatientId,
    pub symptoms: String,
}

/// The text shown to the user once a triage call comes back.
pub type TriageResult = String;

/// Pulls the recommendation out of a triage response.
///
/// A truthy `triage` field wins: strings are returned as they are and any
/// other value as compact JSON. A missing or falsy field (`null`, `false`,
/// `0`, `""`) falls back to the whole response as compact JSON.
pub fn triage_text(response: &Value) -> TriageResult {
    match response.get("triage") {
        Some(Value::String(text)) if !text.is_empty() => text.clone(),
        Some(value) if is_truthy(value) => value.to_string(),
        _ => response.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map_or(true, |n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_triage_is_returned_verbatim() {
        let response = json!({"triage": "see a doctor", "used_chain": true});
        assert_eq!(triage_text(&response), "see a doctor");
    }

    #[test]
    fn missing_triage_falls_back_to_whole_response() {
        let response = json!({"status": "ok"});
        assert_eq!(triage_text(&response), r#"{"status":"ok"}"#);
    }

    #[test]
    fn structured_triage_is_stringified() {
        let response = json!({"triage": {"urgency": "high", "next": ["call 911"]}});
        assert_eq!(
            triage_text(&response),
            r#"{"urgency":"high","next":["call 911"]}"#
        );

        let response = json!({"triage": 3});
        assert_eq!(triage_text(&response), "3");
    }

    #[test]
    fn falsy_triage_falls_back_to_whole_response() {
        for response in [
            json!({"triage": null}),
            json!({"triage": ""}),
            json!({"triage": false}),
            json!({"triage": 0}),
        ] {
            assert_eq!(triage_text(&response), response.to_string());
        }
    }

    #[test]
    fn fallback_keeps_the_backend_key_order() {
        let response: Value = serde_json::from_str(r#"{"zeta":1,"alpha":2}"#).unwrap();
        assert_eq!(triage_text(&response), r#"{"zeta":1,"alpha":2}"#);
    }

    #[test]
    fn non_object_responses_are_stringified() {
        assert_eq!(triage_text(&json!(["a", "b"])), r#"["a","b"]"#);
        assert_eq!(triage_text(&json!("plain")), r#""plain""#);
    }

    #[test]
    fn request_body_uses_backend_field_names() {
        let request = TriageRequest {
            patient_id: PatientId::new(1),
            symptoms: "headache".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"patient_id":1,"symptoms":"headache"}"#
        );
    }
}
