use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::models::DesignDocument;

static TAGGED_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```(?i:json)[ \t]*\r?\n(.*?)\r?\n[ \t]*```").expect("valid tagged fence pattern")
});

static PLAIN_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```[ \t]*\r?\n(.*?)\r?\n[ \t]*```").expect("valid plain fence pattern")
});

/// Returns the JSON candidate inside a reply: the body of a ```json fence,
/// else the body of a bare ``` fence, else the whole text.
pub fn extract_json_candidate(text: &str) -> &str {
    [&*TAGGED_FENCE, &*PLAIN_FENCE]
        .iter()
        .find_map(|pattern| pattern.captures(text).and_then(|caps| caps.get(1)))
        .map(|body| body.as_str())
        .unwrap_or(text)
}

/// Outcome of reading a completion as a design document
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedDesign {
    Parsed(DesignDocument),
    Unparsed(String),
}

impl ParsedDesign {
    pub fn into_document(self) -> DesignDocument {
        match self {
            ParsedDesign::Parsed(document) => document,
            ParsedDesign::Unparsed(raw) => DesignDocument::fallback(raw),
        }
    }
}

pub fn parse_design(text: &str) -> ParsedDesign {
    let candidate = extract_json_candidate(text);
    debug!("JSON candidate is {} of {} bytes", candidate.len(), text.len());

    match serde_json::from_str::<DesignDocument>(candidate) {
        Ok(document) => ParsedDesign::Parsed(document),
        Err(e) => {
            warn!("Failed to parse AI response as JSON: {}", e);
            ParsedDesign::Unparsed(text.to_string())
        }
    }
}
