//! Habitat design generation: prompt construction, the gateway round trip,
//! and normalization of whatever text the model sends back.

pub mod extract;
pub mod gateway;
pub mod prompt;

pub use extract::{ParsedDesign, extract_json_candidate, parse_design};
pub use gateway::GatewayClient;
pub use prompt::{SYSTEM_PROMPT, build_user_prompt};

use crate::error::AppResult;
use crate::models::{DesignDocument, DesignRequest};

/// Asks the gateway for a design and normalizes the reply.
/// Unparseable replies become a fallback document rather than an error.
pub async fn generate_design(
    gateway: &GatewayClient,
    request: &DesignRequest,
) -> AppResult<DesignDocument> {
    let user_prompt = build_user_prompt(request);
    let content = gateway.complete(SYSTEM_PROMPT, &user_prompt).await?;
    Ok(parse_design(&content).into_document())
}
