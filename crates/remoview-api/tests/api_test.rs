//! Route tests driving the router directly with `oneshot`

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use remoview_api::{create_router, AppState};
use remoview_core::error::{RemoviewError, Result};
use remoview_llm::ports::{Generator, StructuredRequest};
use remoview_store::MemoryHistoryStore;
use serde_json::{json, Value};
use tower::ServiceExt;

struct ScriptedGenerator {
    responses: Mutex<Vec<Result<String>>>,
    calls: AtomicUsize,
}

impl ScriptedGenerator {
    fn with(responses: Vec<Result<String>>) -> Arc<Self> {
        Arc::new(Self { responses: Mutex::new(responses), calls: AtomicUsize::new(0) })
    }
}

#[async_trait]
impl Generator for ScriptedGenerator {
    async fn generate(&self, _request: &StructuredRequest) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.responses.lock().unwrap().pop();
        next.unwrap_or_else(|| Err(RemoviewError::Generation { reason: "exhausted".to_string() }))
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}

fn model_response() -> String {
    let feedback = json!({
        "guess": "canal",
        "actual": "Grand Canal",
        "evaluation": "correct",
        "explanation": "Venice is built on canals."
    });
    json!({
        "locationData": {
            "country": "Italy",
            "continent": "Europe",
            "areaType": "Urban",
            "majorFeatures": ["Grand Canal"],
            "dominantLanguages": ["Italian"]
        },
        "validationResult": {
            "score": 92,
            "feedback": {
                "seenObject1": feedback,
                "seenObject2": feedback,
                "seenObject3": feedback,
                "continent": feedback,
                "language": feedback,
                "areaType": feedback
            }
        },
        "photoKeywords": "venice, canal"
    })
    .to_string()
}

fn submission(first_impression: &str) -> Value {
    json!({
        "coordinates": { "lat": 45.4408, "lng": 12.3155 },
        "guesses": {
            "seenObject1": first_impression,
            "seenObject2": "gondola",
            "seenObject3": "bell tower",
            "continent": "Europe",
            "language": "Italian",
            "areaType": "Urban"
        }
    })
}

fn app(generator: Arc<ScriptedGenerator>) -> Router {
    let history = Arc::new(MemoryHistoryStore::new());
    create_router(Arc::new(AppState::new(generator, history)))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let app = app(ScriptedGenerator::with(vec![]));
    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_coordinates() {
    let app = app(ScriptedGenerator::with(vec![]));
    let (status, body) = send(&app, get("/api/v1/coordinates")).await;

    assert_eq!(status, StatusCode::OK);
    let lat = body["coordinates"]["lat"].as_f64().unwrap();
    assert!((-90.0..=90.0).contains(&lat));
    assert!(body["formatted"].as_str().unwrap().contains('°'));
    assert!(body["mapUrl"].as_str().unwrap().starts_with("https://static-map.openstreetmap.de/"));
}

#[tokio::test]
async fn test_submit_then_list_and_get() {
    let generator = ScriptedGenerator::with(vec![Ok(model_response())]);
    let app = app(generator.clone());

    let (status, created) = send(&app, post_json("/api/v1/sessions", &submission("canal"))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["validation"]["score"], json!(92.0));
    assert_eq!(created["realData"]["country"], "Italy");
    assert_eq!(created["photoUrl"], "https://source.unsplash.com/800x400/?venice,canal");
    assert_eq!(created["photoAttribution"], "Photo from Unsplash");

    let (status, list) = send(&app, get("/api/v1/sessions")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let id = created["id"].as_str().unwrap();
    let (status, found) = send(&app, get(&format!("/api/v1/sessions/{}", id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found, created);
}

#[tokio::test]
async fn test_invalid_guesses_are_422_without_generation() {
    let generator = ScriptedGenerator::with(vec![Ok(model_response())]);
    let app = app(generator.clone());

    let (status, body) = send(&app, post_json("/api/v1/sessions", &submission("Air"))).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["error"],
        "Please fill all psychic fields and avoid generic terms like \"air\" or \"sky\"."
    );
    assert_eq!(generator.calls.load(Ordering::SeqCst), 0);

    let (_, list) = send(&app, get("/api/v1/sessions")).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_remote_failure_is_502_with_generic_message() {
    let generator = ScriptedGenerator::with(vec![Ok("not json at all".to_string())]);
    let app = app(generator.clone());

    let (status, body) = send(&app, post_json("/api/v1/sessions", &submission("canal"))).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(
        body["error"],
        "An error occurred during validation. The connection may be unstable. Please try again."
    );
    assert!(body.get("details").is_none());
    assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_unknown_session_is_404() {
    let app = app(ScriptedGenerator::with(vec![]));

    let (status, _) =
        send(&app, get("/api/v1/sessions/7d444840-9dc0-11d1-b245-5ffdce74fad2")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, get("/api/v1/sessions/not-a-uuid")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
