//! End-to-end tests over the warp routes with in-memory doubles for the
//! completion endpoint and the spreadsheet backend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;
use warp::http::StatusCode;

use visaid_server::enums::template_kind::TemplateKind;
use visaid_server::errors::{VisaidError, VisaidResult};
use visaid_server::server::analysis_server::{routes, AppContext};
use visaid_server::services::template_store::TemplateStore;
use visaid_server::structs::completion::Completion;
use visaid_server::traits::completion_client::CompletionClient;
use visaid_server::traits::tabular_backend::TabularBackend;

/// Completion double returning a canned response and recording the prompt.
struct StubCompletion {
    text: String,
    finish_reason: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl StubCompletion {
    fn new(text: &str) -> Arc<Self> {
        Arc::new(Self {
            text: text.to_string(),
            finish_reason: Some("stop".to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn truncated(text: &str) -> Arc<Self> {
        Arc::new(Self {
            text: text.to_string(),
            finish_reason: Some("length".to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CompletionClient for StubCompletion {
    async fn complete(&self, prompt: String, _max_tokens: u32) -> VisaidResult<Completion> {
        self.prompts.lock().unwrap().push(prompt);
        Ok(Completion {
            text: self.text.clone(),
            finish_reason: self.finish_reason.clone(),
        })
    }
}

/// Spreadsheet double: one Vec of rows per tab, row 0 reserved for headers.
#[derive(Default)]
struct MemoryBackend {
    tabs: Mutex<HashMap<String, Vec<Vec<String>>>>,
}

fn split_range(range: &str) -> (&str, &str) {
    range.split_once('!').unwrap_or((range, ""))
}

#[async_trait]
impl TabularBackend for MemoryBackend {
    async fn read_range(&self, range: &str) -> VisaidResult<Vec<Vec<String>>> {
        let (tab, cells) = split_range(range);
        let tabs = self.tabs.lock().unwrap();
        let rows = tabs.get(tab).cloned().unwrap_or_default();
        if cells.starts_with("A2") {
            Ok(rows.into_iter().skip(1).collect())
        } else {
            Ok(rows)
        }
    }

    async fn write_range(&self, range: &str, rows: Vec<Vec<String>>) -> VisaidResult<()> {
        let (tab, cells) = split_range(range);
        let mut tabs = self.tabs.lock().unwrap();
        let entry = tabs.entry(tab.to_string()).or_default();
        let index = if cells.starts_with("A1") { 0 } else { 1 };
        while entry.len() <= index {
            entry.push(Vec::new());
        }
        entry[index] = rows.into_iter().next().unwrap_or_default();
        Ok(())
    }

    async fn append_rows(&self, range: &str, rows: Vec<Vec<String>>) -> VisaidResult<()> {
        let (tab, _) = split_range(range);
        let mut tabs = self.tabs.lock().unwrap();
        tabs.entry(tab.to_string()).or_default().extend(rows);
        Ok(())
    }

    async fn sheet_titles(&self) -> VisaidResult<Vec<String>> {
        Ok(self.tabs.lock().unwrap().keys().cloned().collect())
    }

    async fn add_sheet(&self, title: &str) -> VisaidResult<()> {
        self.tabs
            .lock()
            .unwrap()
            .entry(title.to_string())
            .or_default();
        Ok(())
    }
}

/// Backend double where every call fails, for the seed-fallback path.
struct UnreachableBackend;

#[async_trait]
impl TabularBackend for UnreachableBackend {
    async fn read_range(&self, _range: &str) -> VisaidResult<Vec<Vec<String>>> {
        Err(VisaidError::store_unavailable("read", "unreachable"))
    }

    async fn write_range(&self, _range: &str, _rows: Vec<Vec<String>>) -> VisaidResult<()> {
        Err(VisaidError::store_unavailable("write", "unreachable"))
    }

    async fn append_rows(&self, _range: &str, _rows: Vec<Vec<String>>) -> VisaidResult<()> {
        Err(VisaidError::store_unavailable("append", "unreachable"))
    }

    async fn sheet_titles(&self) -> VisaidResult<Vec<String>> {
        Err(VisaidError::store_unavailable("list sheets", "unreachable"))
    }

    async fn add_sheet(&self, _title: &str) -> VisaidResult<()> {
        Err(VisaidError::store_unavailable("add sheet", "unreachable"))
    }
}

fn context_with(
    completion: Arc<dyn CompletionClient>,
    backend: Arc<dyn TabularBackend>,
) -> Arc<AppContext> {
    Arc::new(AppContext {
        completion,
        templates: Arc::new(TemplateStore::new(backend)),
    })
}

fn analysis_body() -> Value {
    serde_json::json!({
        "subject": "Science",
        "grade": "6th grade",
        "content": "Light bends when it passes from air into water."
    })
}

const SCREENING_RESPONSE_SUM_95: &str = r#"{
    "visualTypeSuitability": {
        "illustration": 30, "photo": 30, "flowchart": 30, "graph": 5, "table": 0
    },
    "reasonSummary": [
        {"type": "illustration", "reason": "a"},
        {"type": "photo", "reason": "b"},
        {"type": "flowchart", "reason": "c"},
        {"type": "graph", "reason": "d"},
        {"type": "table", "reason": "e"}
    ]
}"#;

fn combined_response() -> String {
    let recommendations: Vec<String> = ["illustration", "photo", "flowchart", "graph", "table"]
        .iter()
        .map(|key| {
            format!(
                r#"{{"type": "{}", "suitabilityPercent": 20, "reason": "fits", "freeImageSources": []}}"#,
                key
            )
        })
        .collect();
    format!(
        r#"{{"visualTypeSuitability": {{"illustration": 20, "photo": 20, "flowchart": 20, "graph": 20, "table": 20}}, "visualRecommendations": [{}]}}"#,
        recommendations.join(", ")
    )
}

const DETAIL_RESPONSE_WRONG_TAG: &str = r#"{
    "type": "photo",
    "reason": "shows the real thing",
    "freeImageSources": [
        {"site": "Pixabay", "searchKeywords": "light", "url": "https://pixabay.com/images/search/light/"}
    ],
    "imageGenerationPrompt": {
        "purpose": "p", "conditions": "c", "composition": "co", "precautions": "pr"
    }
}"#;

async fn reply_json<R: warp::Reply + Send + 'static>(
    filter: &warp::filters::BoxedFilter<(R,)>,
    method: &str,
    path: &str,
    body: Option<&Value>,
) -> (StatusCode, Value) {
    let mut request = warp::test::request().method(method).path(path);
    if let Some(body) = body {
        request = request.json(body);
    }
    let response = request.reply(filter).await;
    let status = response.status();
    let value: Value = serde_json::from_slice(response.body()).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn screening_normalizes_the_suitability_map_end_to_end() {
    let stub = StubCompletion::new(SCREENING_RESPONSE_SUM_95);
    let context = context_with(stub.clone(), Arc::new(MemoryBackend::default()));
    let filter = routes(context);

    let (status, body) = reply_json(
        &filter,
        "POST",
        "/api/analyze/screening",
        Some(&analysis_body()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let suitability = &body["visualTypeSuitability"];
    assert_eq!(suitability["illustration"], 31);
    assert_eq!(suitability["photo"], 32);
    assert_eq!(suitability["flowchart"], 32);
    assert_eq!(suitability["graph"], 5);
    assert_eq!(suitability["table"], 0);
    assert_eq!(body["reasonSummary"].as_array().unwrap().len(), 5);

    // The prompt carried the seed template (empty store) and the passage.
    let prompt = stub.last_prompt().unwrap();
    assert!(prompt.contains(TemplateKind::Screening.seed()));
    assert!(prompt.contains("Light bends when it passes from air into water."));
}

#[tokio::test]
async fn analyze_returns_the_combined_result() {
    let stub = StubCompletion::new(&combined_response());
    let context = context_with(stub, Arc::new(MemoryBackend::default()));
    let filter = routes(context);

    let (status, body) = reply_json(&filter, "POST", "/api/analyze", Some(&analysis_body())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["visualRecommendations"].as_array().unwrap().len(), 5);
    assert_eq!(body["visualTypeSuitability"]["illustration"], 20);
}

#[tokio::test]
async fn analyze_rejects_missing_subject_with_400() {
    let stub = StubCompletion::new("{}");
    let context = context_with(stub, Arc::new(MemoryBackend::default()));
    let filter = routes(context);

    let body = serde_json::json!({ "content": "some passage" });
    let (status, body) = reply_json(&filter, "POST", "/api/analyze", Some(&body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("required"));
}

#[tokio::test]
async fn a_length_finish_reason_short_circuits_with_500() {
    let stub = StubCompletion::truncated(&combined_response());
    let context = context_with(stub, Arc::new(MemoryBackend::default()));
    let filter = routes(context);

    let (status, body) = reply_json(&filter, "POST", "/api/analyze", Some(&analysis_body())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("cut off"));
}

#[tokio::test]
async fn detail_overrides_the_tag_and_substitutes_fallback_sources() {
    let stub = StubCompletion::new(DETAIL_RESPONSE_WRONG_TAG);
    let context = context_with(stub, Arc::new(MemoryBackend::default()));
    let filter = routes(context);

    let body = serde_json::json!({
        "visualType": "graph",
        "formData": analysis_body(),
    });
    let (status, body) = reply_json(&filter, "POST", "/api/analyze/detail", Some(&body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "graph");
    assert_eq!(body["freeImageSources"].as_array().unwrap().len(), 3);
    assert_eq!(body["imageGenerationPrompt"]["purpose"], "p");
}

#[tokio::test]
async fn detail_rejects_an_unknown_visual_type() {
    let stub = StubCompletion::new(DETAIL_RESPONSE_WRONG_TAG);
    let context = context_with(stub, Arc::new(MemoryBackend::default()));
    let filter = routes(context);

    let body = serde_json::json!({
        "visualType": "diagram",
        "formData": analysis_body(),
    });
    let (status, _) = reply_json(&filter, "POST", "/api/analyze/detail", Some(&body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn templates_fall_back_to_the_seed_when_the_store_is_unreachable() {
    let stub = StubCompletion::new("{}");
    let context = context_with(stub, Arc::new(UnreachableBackend));
    let filter = routes(context);

    let (status, body) = reply_json(&filter, "GET", "/api/admin/template/screening", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["prompt"], TemplateKind::Screening.seed());
}

#[tokio::test]
async fn saving_and_reading_a_template_round_trips() {
    let stub = StubCompletion::new("{}");
    let backend = Arc::new(MemoryBackend::default());
    let context = context_with(stub, backend);
    context.templates.initialize().await.unwrap();
    let filter = routes(context);

    let body = serde_json::json!({ "prompt": "my new screening template" });
    let (status, saved) =
        reply_json(&filter, "POST", "/api/admin/template/screening", Some(&body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(saved["success"], true);

    let (status, body) = reply_json(&filter, "GET", "/api/admin/template/screening", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["prompt"], "my new screening template");
}

#[tokio::test]
async fn saving_an_empty_template_is_rejected() {
    let stub = StubCompletion::new("{}");
    let context = context_with(stub, Arc::new(MemoryBackend::default()));
    let filter = routes(context);

    let body = serde_json::json!({ "prompt": "   " });
    let (status, body) =
        reply_json(&filter, "POST", "/api/admin/template/full", Some(&body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("empty"));
}

#[tokio::test]
async fn history_lists_saves_newest_first_with_sequential_versions() {
    let stub = StubCompletion::new("{}");
    let context = context_with(stub, Arc::new(MemoryBackend::default()));
    context.templates.initialize().await.unwrap();
    let filter = routes(context);

    for text in ["first version", "second version"] {
        let body = serde_json::json!({ "prompt": text });
        let (status, _) =
            reply_json(&filter, "POST", "/api/admin/template/photo", Some(&body)).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) =
        reply_json(&filter, "GET", "/api/admin/template/photo/history", None).await;

    assert_eq!(status, StatusCode::OK);
    let backups = body["backups"].as_array().unwrap();
    assert_eq!(backups.len(), 2);
    assert_eq!(backups[0]["version"], 2);
    assert_eq!(backups[0]["preview"], "second version");
    assert_eq!(backups[0]["modifiedBy"], "admin");
    assert_eq!(backups[1]["version"], 1);
}

#[tokio::test]
async fn restoring_an_unknown_version_is_404_and_leaves_current_alone() {
    let stub = StubCompletion::new("{}");
    let context = context_with(stub, Arc::new(MemoryBackend::default()));
    context.templates.initialize().await.unwrap();
    let filter = routes(context);

    let body = serde_json::json!({ "prompt": "the only version" });
    reply_json(&filter, "POST", "/api/admin/template/table", Some(&body)).await;

    let body = serde_json::json!({ "version": 42 });
    let (status, _) =
        reply_json(&filter, "POST", "/api/admin/template/table/restore", Some(&body)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = reply_json(&filter, "GET", "/api/admin/template/table", None).await;
    assert_eq!(body["prompt"], "the only version");
}

#[tokio::test]
async fn restoring_a_known_version_reactivates_its_text() {
    let stub = StubCompletion::new("{}");
    let context = context_with(stub, Arc::new(MemoryBackend::default()));
    context.templates.initialize().await.unwrap();
    let filter = routes(context);

    for text in ["first version", "second version"] {
        let body = serde_json::json!({ "prompt": text });
        reply_json(&filter, "POST", "/api/admin/template/graph", Some(&body)).await;
    }

    let body = serde_json::json!({ "version": 1 });
    let (status, restored) =
        reply_json(&filter, "POST", "/api/admin/template/graph/restore", Some(&body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(restored["preview"], "first version");

    let (_, body) = reply_json(&filter, "GET", "/api/admin/template/graph", None).await;
    assert_eq!(body["prompt"], "first version");

    // The restore itself lands in the history with provenance.
    let (_, body) = reply_json(&filter, "GET", "/api/admin/template/graph/history", None).await;
    let backups = body["backups"].as_array().unwrap();
    assert_eq!(backups.len(), 3);
    assert!(backups[0]["modifiedBy"]
        .as_str()
        .unwrap()
        .contains("restored from v1"));
}

#[tokio::test]
async fn reset_reactivates_the_seed_template() {
    let stub = StubCompletion::new("{}");
    let context = context_with(stub, Arc::new(MemoryBackend::default()));
    context.templates.initialize().await.unwrap();
    let filter = routes(context);

    let body = serde_json::json!({ "prompt": "hand edited" });
    reply_json(&filter, "POST", "/api/admin/template/flowchart", Some(&body)).await;

    let (status, _) =
        reply_json(&filter, "POST", "/api/admin/template/flowchart/reset", None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = reply_json(&filter, "GET", "/api/admin/template/flowchart", None).await;
    assert_eq!(
        body["prompt"],
        TemplateKind::from_key("flowchart").unwrap().seed()
    );
}

#[tokio::test]
async fn unknown_template_categories_are_rejected() {
    let stub = StubCompletion::new("{}");
    let context = context_with(stub, Arc::new(MemoryBackend::default()));
    let filter = routes(context);

    let (status, body) = reply_json(&filter, "GET", "/api/admin/template/summary", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("summary"));
}

#[tokio::test]
async fn full_template_reports_character_and_line_counts() {
    let stub = StubCompletion::new("{}");
    let context = context_with(stub, Arc::new(MemoryBackend::default()));
    context.templates.initialize().await.unwrap();
    let filter = routes(context);

    let body = serde_json::json!({ "prompt": "line one\nline two" });
    reply_json(&filter, "POST", "/api/admin/template/graph", Some(&body)).await;

    let (status, body) =
        reply_json(&filter, "GET", "/api/admin/template/graph/full", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["length"], 17);
    assert_eq!(body["lines"], 2);
}

#[tokio::test]
async fn refresh_reports_the_current_template_length() {
    let stub = StubCompletion::new("{}");
    let context = context_with(stub, Arc::new(MemoryBackend::default()));
    context.templates.initialize().await.unwrap();
    let filter = routes(context);

    let body = serde_json::json!({ "prompt": "short template" });
    reply_json(&filter, "POST", "/api/admin/template/full", Some(&body)).await;

    let (status, body) =
        reply_json(&filter, "POST", "/api/admin/template/full/refresh", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["promptLength"], 14);
}

#[tokio::test]
async fn index_page_is_served() {
    let stub = StubCompletion::new("{}");
    let context = context_with(stub, Arc::new(MemoryBackend::default()));
    let filter = routes(context);

    let response = warp::test::request().method("GET").path("/").reply(&filter).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = String::from_utf8_lossy(response.body());
    assert!(body.contains("Visaid"));
}

#[tokio::test]
async fn health_endpoint_responds() {
    let stub = StubCompletion::new("{}");
    let context = context_with(stub, Arc::new(MemoryBackend::default()));
    let filter = routes(context);

    let (status, body) = reply_json(&filter, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
