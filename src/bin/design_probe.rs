use anyhow::Result;
use habitat_designer_svc::config::GatewayConfig;
use habitat_designer_svc::design::{
    GatewayClient, ParsedDesign, SYSTEM_PROMPT, build_user_prompt, parse_design,
};
use habitat_designer_svc::models::DesignRequest;

fn sample_request() -> DesignRequest {
    let planet = std::env::args().nth(1).unwrap_or_else(|| "mars".to_string());
    let residents = std::env::args()
        .nth(2)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(4);

    DesignRequest {
        planet,
        residents,
        size: "medium".to_string(),
        shape: "modular".to_string(),
        purpose: "research".to_string(),
        lifestyle: "balanced".to_string(),
        systems: vec!["life-support".to_string(), "waste-management".to_string()],
        notes: None,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    println!("🚀 Habitat Designer Gateway Probe");
    println!("{}", "=".repeat(50));

    let config = GatewayConfig::from_env();
    println!("Gateway: {:?}", config);

    if config.api_key.is_none() {
        println!("❌ LOVABLE_API_KEY is not set");
        println!("💡 Export it before running: export LOVABLE_API_KEY=...");
        return Ok(());
    }

    let request = sample_request();
    let user_prompt = build_user_prompt(&request);
    println!("\n📝 User prompt:\n{}", user_prompt);

    let client = GatewayClient::new(config)?;
    let content = match client.complete(SYSTEM_PROMPT, &user_prompt).await {
        Ok(content) => content,
        Err(e) => {
            println!("❌ Gateway call failed ({}): {}", e.status_code(), e);
            return Ok(());
        }
    };
    println!("\n📨 Raw reply ({} chars)", content.len());

    match parse_design(&content) {
        ParsedDesign::Parsed(design) => {
            println!("✅ Reply parsed as a design document");
            println!("{}", serde_json::to_string_pretty(&design)?);
        }
        ParsedDesign::Unparsed(raw) => {
            println!("⚠️  Reply was not JSON, fallback document would be returned");
            println!("{}", raw);
        }
    }

    println!("\n{}", "=".repeat(50));
    println!("🏁 Probe completed!");
    Ok(())
}
