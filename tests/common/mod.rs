use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::post;
use axum::{Json, Router};
use habitat_designer_svc::config::{Config, GatewayConfig};
use habitat_designer_svc::create_app;
use serde_json::{Value, json};
use tokio::sync::Mutex;

/// A call the fake gateway received
#[derive(Debug, Clone)]
pub struct SeenCall {
    pub authorization: Option<String>,
    pub body: Value,
}

struct FakeReply {
    status: StatusCode,
    body: String,
    seen: Mutex<Vec<SeenCall>>,
}

/// Stand-in for the chat-completion gateway, answering every call with a
/// fixed status and body
pub struct FakeGateway {
    pub addr: SocketAddr,
    reply: Arc<FakeReply>,
}

impl FakeGateway {
    pub async fn completion(content: &str) -> Self {
        let body = json!({
            "choices": [{ "message": { "role": "assistant", "content": content } }]
        });
        Self::start(StatusCode::OK, body.to_string()).await
    }

    pub async fn failing(status: StatusCode) -> Self {
        Self::start(status, r#"{"error":"upstream says no"}"#.to_string()).await
    }

    pub async fn start(status: StatusCode, body: String) -> Self {
        let reply = Arc::new(FakeReply {
            status,
            body,
            seen: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/v1/chat/completions", post(completions))
            .with_state(reply.clone());
        let addr = serve(app).await;

        Self { addr, reply }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    pub async fn calls(&self) -> Vec<SeenCall> {
        self.reply.seen.lock().await.clone()
    }
}

async fn completions(
    State(reply): State<Arc<FakeReply>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    reply.seen.lock().await.push(SeenCall {
        authorization,
        body,
    });

    (
        reply.status,
        [(header::CONTENT_TYPE, "application/json")],
        reply.body.clone(),
    )
}

async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve test app");
    });
    addr
}

/// The real service, listening on an ephemeral port
pub struct TestService {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
}

impl TestService {
    pub async fn start(gateway_url: String, api_key: Option<&str>) -> Self {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            log_level: "habitat_designer_svc=debug".to_string(),
            gateway: GatewayConfig::new(gateway_url, api_key.map(str::to_string)),
        };
        let app = create_app(&config).expect("create app");
        let addr = serve(app).await;

        Self {
            addr,
            client: reqwest::Client::new(),
        }
    }

    /// Service wired to `gateway` with a valid credential
    pub async fn with_gateway(gateway: &FakeGateway) -> Self {
        Self::start(gateway.base_url(), Some("test-key")).await
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> (StatusCode, Value) {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("send request");
        let status = response.status();
        let body = response.json::<Value>().await.expect("json body");
        (status, body)
    }
}

pub fn design_request() -> Value {
    json!({
        "planet": "mars",
        "residents": 4,
        "size": "medium",
        "shape": "modular",
        "purpose": "research",
        "lifestyle": "balanced",
        "systems": ["life-support", "waste-management"],
        "notes": ""
    })
}

pub fn design_json() -> Value {
    json!({
        "volumeRequired": "850 cubic meters",
        "recommendedModules": ["Living Quarters", "Laboratory", "Hydroponics Bay"],
        "layout": {
            "description": "Three buried modules joined by a central node",
            "zones": ["Habitation", "Research", "Agriculture"]
        },
        "criticalSystems": ["Life support with triple redundancy"],
        "missingSystems": ["Radiation storm shelter"],
        "specialConsiderations": ["Regolith shielding against dust storms"],
        "costEstimate": "$3.5 billion",
        "constructionTime": "4-5 years"
    })
}
