use anyhow::{Context, Result};
use serde_json::Value;

pub const DEFAULT_SOURCE_LANGUAGE: &str = "Brazilian Portuguese";

/// Builds the single user message sent for one target language. The source
/// document is embedded pretty-printed with two-space indentation.
pub fn build_prompt(source_language: &str, target_language: &str, source: &Value) -> Result<String> {
    let body = serde_json::to_string_pretty(source).context("failed to serialize source document")?;
    Ok(format!(
        "Translate this JSON from {source_language} to {target_language}.\n\
         Keep the JSON structure exactly the same, only translate the values (text strings).\n\
         Do NOT translate keys, only values.\n\
         Return ONLY valid JSON, no explanations.\n\
         \n\
         {body}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn embeds_languages_and_document() {
        let source = json!({"greeting": "Olá"});
        let prompt = build_prompt(DEFAULT_SOURCE_LANGUAGE, "English (United States)", &source).unwrap();

        assert!(prompt.starts_with(
            "Translate this JSON from Brazilian Portuguese to English (United States).\n"
        ));
        assert!(prompt.contains("Do NOT translate keys, only values.\n"));
        assert!(prompt.ends_with("\n\n{\n  \"greeting\": \"Olá\"\n}"));
    }

    #[test]
    fn keeps_key_order_of_nested_documents() {
        let source: Value =
            serde_json::from_str(r#"{"zeta": {"b": "1", "a": "2"}, "alpha": "x"}"#).unwrap();
        let prompt = build_prompt("German", "French (France)", &source).unwrap();

        let zeta = prompt.find("\"zeta\"").unwrap();
        let alpha = prompt.find("\"alpha\"").unwrap();
        let b = prompt.find("\"b\"").unwrap();
        let a = prompt.find("\"a\"").unwrap();
        assert!(zeta < alpha);
        assert!(b < a);
        assert!(prompt.contains("    \"b\": \"1\""));
    }
}
