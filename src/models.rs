use serde::{Deserialize, Serialize};

/// Request payload for the habitat designer endpoint
///
/// Enumerated fields (size, shape, purpose, lifestyle) are kept as plain
/// strings and passed through to the prompt without validation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DesignRequest {
    pub planet: String,
    pub residents: i64,
    pub size: String,
    pub shape: String,
    pub purpose: String,
    pub lifestyle: String,
    #[serde(default)]
    pub systems: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl DesignRequest {
    /// Notes worth mentioning in the prompt, if any
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref().filter(|notes| !notes.is_empty())
    }

    pub fn input_parameters(&self) -> InputParameters {
        InputParameters {
            planet: self.planet.clone(),
            residents: self.residents,
            size: self.size.clone(),
            shape: self.shape.clone(),
            purpose: self.purpose.clone(),
            lifestyle: self.lifestyle.clone(),
        }
    }
}

/// Echo of the request fields returned alongside a design
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct InputParameters {
    pub planet: String,
    pub residents: i64,
    pub size: String,
    pub shape: String,
    pub purpose: String,
    pub lifestyle: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Layout {
    pub description: String,
    pub zones: Vec<String>,
}

pub const UNKNOWN_VOLUME: &str = "Unable to calculate";
pub const NOT_AVAILABLE: &str = "N/A";

/// Normalized habitat design returned to the client
///
/// Fields missing from an upstream reply take their default value, so the
/// serialized document always carries every key except `rawResponse`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DesignDocument {
    pub volume_required: String,
    pub recommended_modules: Vec<String>,
    pub layout: Layout,
    pub critical_systems: Vec<String>,
    pub missing_systems: Vec<String>,
    pub special_considerations: Vec<String>,
    pub cost_estimate: String,
    pub construction_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
}

impl Default for DesignDocument {
    fn default() -> Self {
        Self {
            volume_required: UNKNOWN_VOLUME.to_string(),
            recommended_modules: Vec::new(),
            layout: Layout::default(),
            critical_systems: Vec::new(),
            missing_systems: Vec::new(),
            special_considerations: Vec::new(),
            cost_estimate: NOT_AVAILABLE.to_string(),
            construction_time: NOT_AVAILABLE.to_string(),
            raw_response: None,
        }
    }
}

impl DesignDocument {
    /// Builds the document returned when the upstream reply is not usable JSON.
    /// The raw text is kept both as `rawResponse` and as the layout description.
    pub fn fallback(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self {
            layout: Layout {
                description: raw.clone(),
                zones: Vec::new(),
            },
            raw_response: Some(raw),
            ..Self::default()
        }
    }
}

/// Success envelope for the habitat designer endpoint
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignResponse {
    pub success: bool,
    pub design: DesignDocument,
    pub input_parameters: InputParameters,
}

impl DesignResponse {
    pub fn new(design: DesignDocument, input_parameters: InputParameters) -> Self {
        Self {
            success: true,
            design,
            input_parameters,
        }
    }
}

/// Response payload for the health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            message: "Service is healthy".to_string(),
        }
    }
}
