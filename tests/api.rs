use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use design_assistant_service::{
    config::ServiceConfig,
    routes::create_router,
    service::{
        completion::CompletionService,
        design::{fallback_design_ideas, fallback_design_prompts},
        prompt::PromptTemplate,
    },
    ServiceState,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

#[derive(Default)]
struct StubCompletion {
    output: Option<Value>,
    calls: Mutex<Vec<(String, String, String)>>,
}

impl StubCompletion {
    fn answering(output: Value) -> Self {
        Self {
            output: Some(output),
            ..Default::default()
        }
    }

    fn failing() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl CompletionService for StubCompletion {
    async fn complete(
        &self,
        prompt: &PromptTemplate,
        text: &str,
        model: &str,
    ) -> Result<Value, String> {
        self.calls.lock().unwrap().push((
            prompt.name.to_string(),
            text.to_string(),
            model.to_string(),
        ));
        self.output
            .clone()
            .ok_or_else(|| "completion service unavailable".to_string())
    }
}

fn app(ai: Arc<StubCompletion>) -> Router {
    create_router(Arc::new(ServiceState {
        config: ServiceConfig::default(),
        ai,
    }))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

fn post(uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn missing_text_is_rejected_on_both_generation_routes() {
    for uri in ["/api/generate-design-ideas", "/api/generate-design-prompts"] {
        for body in [r#"{}"#, r#"{"text":null}"#, r#"{"text":""}"#, r#"{"modelId":"gpt-4o"}"#] {
            let ai = Arc::new(StubCompletion::failing());
            let (status, json) = send(app(ai.clone()), post(uri, body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{} {}", uri, body);
            assert_eq!(json, json!({ "error": "Text is required" }));
            assert!(ai.calls.lock().unwrap().is_empty());
        }
    }
}

#[tokio::test]
async fn design_ideas_return_model_output() {
    let output = json!({
        "creativeDesignIdeas": "1. Neon skyline",
        "typographyIdeas": "1. Stacked serif"
    });
    let ai = Arc::new(StubCompletion::answering(output.clone()));
    let (status, json) = send(
        app(ai.clone()),
        post(
            "/api/generate-design-ideas",
            r#"{"text":"City never sleeps","modelId":"openai/gpt-4o","userProfile":{"name":"Mina"}}"#,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, output);
    assert_eq!(
        ai.calls.lock().unwrap().as_slice(),
        &[(
            "generateDesignIdeasPrompt".to_string(),
            "City never sleeps".to_string(),
            "openai/gpt-4o".to_string()
        )]
    );
}

#[tokio::test]
async fn default_model_is_used_when_absent_or_blank() {
    for body in [r#"{"text":"Hi"}"#, r#"{"text":"Hi","modelId":""}"#] {
        let ai = Arc::new(StubCompletion::failing());
        send(app(ai.clone()), post("/api/generate-design-prompts", body)).await;
        let calls = ai.calls.lock().unwrap();
        assert_eq!(calls[0].0, "generateDesignPromptsPrompt");
        assert_eq!(calls[0].2, ServiceConfig::default().openai.default_model);
    }
}

#[tokio::test]
async fn design_ideas_fall_back_when_model_fails() {
    let ai = Arc::new(StubCompletion::failing());
    let (status, json) = send(
        app(ai),
        post("/api/generate-design-ideas", r#"{"text":"Be kind"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::to_value(fallback_design_ideas("Be kind")).unwrap());
}

#[tokio::test]
async fn design_prompts_fall_back_with_declared_shape() {
    let ai = Arc::new(StubCompletion::failing());
    let (status, json) = send(
        app(ai),
        post("/api/generate-design-prompts", r#"{"text":"Be kind"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["creativeDesignPrompts"].as_array().unwrap().len(), 5);
    assert_eq!(json["typographyPrompts"].as_array().unwrap().len(), 2);
    assert_eq!(
        json,
        serde_json::to_value(fallback_design_prompts("Be kind")).unwrap()
    );
}

#[tokio::test]
async fn malformed_model_output_falls_back() {
    let ai = Arc::new(StubCompletion::answering(json!({
        "creativeDesignPrompts": ["one", "two"],
        "typographyPrompts": ["a", "b"]
    })));
    let (status, json) = send(
        app(ai),
        post("/api/generate-design-prompts", r#"{"text":"Dream big"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::to_value(fallback_design_prompts("Dream big")).unwrap()
    );
}

#[tokio::test]
async fn unparseable_body_is_an_internal_error() {
    let cases = [
        ("/api/generate-design-ideas", "Failed to generate design ideas"),
        ("/api/generate-design-prompts", "Failed to generate design prompts"),
    ];
    for (uri, message) in cases {
        for body in ["not json", "[1,2]", r#"["hi",null,null]"#, r#""hi""#, r#"{"text":42}"#] {
            let ai = Arc::new(StubCompletion::failing());
            let (status, json) = send(app(ai), post(uri, body)).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{} {}", uri, body);
            assert_eq!(json, json!({ "error": message }));
        }
    }
}

#[tokio::test]
async fn search_returns_five_items_embedding_query() {
    let ai = Arc::new(StubCompletion::failing());
    let (status, json) = send(app(ai), get("/api/search?q=floral%20logo")).await;

    assert_eq!(status, StatusCode::OK);
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 5);
    for item in items {
        assert!(item["title"].as_str().unwrap().contains("floral logo"));
        assert!(item["link"].as_str().unwrap().starts_with("https://example.com/design"));
        assert!(!item["snippet"].as_str().unwrap().is_empty());
    }
}

#[tokio::test]
async fn search_uses_first_value_of_repeated_query_key() {
    let ai = Arc::new(StubCompletion::failing());
    let (status, json) = send(app(ai), get("/api/search?q=a&q=b")).await;

    assert_eq!(status, StatusCode::OK);
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 5);
    assert_eq!(items[0]["title"], "Creative a Design Example 1");
}

#[tokio::test]
async fn oversized_body_is_rejected_with_json_error() {
    let cases = [
        ("/api/generate-design-ideas", "Failed to generate design ideas"),
        ("/api/generate-design-prompts", "Failed to generate design prompts"),
    ];
    let text = "x".repeat(2 * 1024 * 1024);
    for (uri, message) in cases {
        let ai = Arc::new(StubCompletion::failing());
        let body = json!({ "text": text }).to_string();
        let (status, json) = send(app(ai.clone()), post(uri, body)).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE, "{}", uri);
        assert_eq!(json, json!({ "error": message }));
        assert!(ai.calls.lock().unwrap().is_empty());
    }
}

#[tokio::test]
async fn invalid_action_panel_flags_get_json_error() {
    let ai = Arc::new(StubCompletion::failing());
    let (status, json) = send(app(ai), get("/api/actions?loading=yes")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({ "error": "Invalid action panel query" }));
}

#[tokio::test]
async fn search_requires_query() {
    for uri in ["/api/search", "/api/search?q=", "/api/search?q=&page=2"] {
        let ai = Arc::new(StubCompletion::failing());
        let (status, json) = send(app(ai), get(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(json, json!({ "error": "Query parameter is required" }));
    }
}

#[tokio::test]
async fn action_panel_reflects_ui_state() {
    let ai = Arc::new(StubCompletion::failing());
    let (status, json) = send(app(ai.clone()), get("/api/actions")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["disabled"], false);
    assert_eq!(json["actions"].as_array().unwrap().len(), 5);
    assert_eq!(json["design"]["actions"][0]["id"], "designIdea");
    assert_eq!(
        json["design"]["actions"][0]["endpoint"],
        "/api/generate-design-ideas"
    );

    let (status, json) = send(app(ai), get("/api/actions?loading=true&hasProfile=true")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["disabled"], true);
    assert_eq!(json["design"]["disabled"], true);
    assert!(json["actions"]
        .as_array()
        .unwrap()
        .iter()
        .all(|a| a["disabled"] == true));
}
