use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use serde_json::json;
use warp::filters::BoxedFilter;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

use crate::config::constants::{COMBINED_MAX_TOKENS, DETAIL_MAX_TOKENS, SCREENING_MAX_TOKENS};
use crate::enums::template_kind::TemplateKind;
use crate::errors::{VisaidError, VisaidResult};
use crate::helpers::prompt_assembler::assemble_prompt;
use crate::logger::response_logger::log_analysis_request;
use crate::server::admin_routes;
use crate::services::response_repair::{parse_combined, parse_detail, parse_screening};
use crate::services::template_store::TemplateStore;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::detail_request::DetailRequest;
use crate::structs::detail_result::DetailResult;
use crate::structs::screening_result::ScreeningResult;
use crate::traits::completion_client::CompletionClient;

/// Explicitly constructed clients shared by all handlers.
pub struct AppContext {
    pub completion: Arc<dyn CompletionClient>,
    pub templates: Arc<TemplateStore>,
}

pub struct AnalysisServer {
    context: Arc<AppContext>,
    port: u16,
}

impl AnalysisServer {
    pub fn new(context: Arc<AppContext>, port: u16) -> Self {
        Self { context, port }
    }

    pub async fn run(&self) -> VisaidResult<()> {
        let filter = routes(Arc::clone(&self.context)).recover(handle_rejection);
        let addr: SocketAddr = ([0, 0, 0, 0], self.port).into();
        log::info!("🌐 visaid server listening on {}", addr);
        warp::serve(filter).run(addr).await;
        Ok(())
    }
}

/// All API routes. Rejection handling is applied by the caller.
pub fn routes(context: Arc<AppContext>) -> BoxedFilter<(impl Reply + Send + 'static,)> {
    let admin = admin_routes::routes(Arc::clone(&context));
    let ctx = warp::any().map(move || Arc::clone(&context));

    let analyze = warp::path!("api" / "analyze")
        .and(warp::post())
        .and(warp::body::json())
        .and(ctx.clone())
        .and_then(analyze_handler);

    let screening = warp::path!("api" / "analyze" / "screening")
        .and(warp::post())
        .and(warp::body::json())
        .and(ctx.clone())
        .and_then(screening_handler);

    let detail = warp::path!("api" / "analyze" / "detail")
        .and(warp::post())
        .and(warp::body::json())
        .and(ctx.clone())
        .and_then(detail_handler);

    let health = warp::path!("health")
        .and(warp::get())
        .map(|| warp::reply::json(&json!({ "status": "ok" })));

    let index = warp::path::end()
        .and(warp::get())
        .map(|| warp::reply::html(include_str!("static/index.html")));

    analyze.or(screening).or(detail).or(health).or(index).or(admin).boxed()
}

pub(crate) fn json_with_status<T: serde::Serialize>(
    value: &T,
    status: StatusCode,
) -> warp::reply::WithStatus<warp::reply::Json> {
    warp::reply::with_status(warp::reply::json(value), status)
}

pub(crate) fn error_reply(error: &VisaidError) -> warp::reply::WithStatus<warp::reply::Json> {
    log::error!("❌ {}", error.technical_details());
    let status = StatusCode::from_u16(error.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    json_with_status(&json!({ "error": error.user_message() }), status)
}

/// Analysis results must never be cached by intermediaries.
pub(crate) fn no_cache<R: Reply>(reply: R) -> impl Reply {
    let reply = warp::reply::with_header(reply, "Cache-Control", "no-cache, no-store, must-revalidate");
    let reply = warp::reply::with_header(reply, "Pragma", "no-cache");
    warp::reply::with_header(reply, "Expires", "0")
}

async fn analyze_handler(
    request: AnalysisRequest,
    context: Arc<AppContext>,
) -> Result<impl Reply, Infallible> {
    let reply = match run_combined(&request, &context).await {
        Ok(result) => json_with_status(&result, StatusCode::OK),
        Err(e) => error_reply(&e),
    };
    Ok(no_cache(reply))
}

async fn screening_handler(
    request: AnalysisRequest,
    context: Arc<AppContext>,
) -> Result<impl Reply, Infallible> {
    let reply = match run_screening(&request, &context).await {
        Ok(result) => json_with_status(&result, StatusCode::OK),
        Err(e) => error_reply(&e),
    };
    Ok(no_cache(reply))
}

async fn detail_handler(
    request: DetailRequest,
    context: Arc<AppContext>,
) -> Result<impl Reply, Infallible> {
    let reply = match run_detail(&request, &context).await {
        Ok(result) => json_with_status(&result, StatusCode::OK),
        Err(e) => error_reply(&e),
    };
    Ok(no_cache(reply))
}

fn validate_request(request: &AnalysisRequest) -> VisaidResult<()> {
    if request.subject.is_empty() || request.content.is_empty() {
        return Err(VisaidError::validation_error(
            "subject",
            "Subject and passage content are required.",
        ));
    }
    Ok(())
}

fn truncated_error() -> VisaidError {
    VisaidError::truncated_response(
        "The response was cut off because it was too long. Try again with a shorter passage.",
    )
}

async fn run_combined(
    request: &AnalysisRequest,
    context: &AppContext,
) -> VisaidResult<AnalysisResult> {
    validate_request(request)?;
    log_analysis_request("analyze", request);

    let template = context.templates.get_current(TemplateKind::Full).await;
    let prompt = assemble_prompt(&template.text, request);
    log::info!(
        "🤖 [analyze] prompt assembled ({} chars); calling completion endpoint",
        prompt.chars().count()
    );

    let completion = context.completion.complete(prompt, COMBINED_MAX_TOKENS).await?;
    if completion.is_truncated() {
        return Err(truncated_error());
    }

    let result = parse_combined(&completion.text)?;
    log::info!("✅ [analyze] combined analysis complete");
    Ok(result)
}

async fn run_screening(
    request: &AnalysisRequest,
    context: &AppContext,
) -> VisaidResult<ScreeningResult> {
    validate_request(request)?;
    log_analysis_request("screening", request);

    let template = context.templates.get_current(TemplateKind::Screening).await;
    let prompt = assemble_prompt(&template.text, request);
    log::info!(
        "🤖 [screening] prompt assembled ({} chars); calling completion endpoint",
        prompt.chars().count()
    );

    let completion = context.completion.complete(prompt, SCREENING_MAX_TOKENS).await?;
    if completion.is_truncated() {
        return Err(truncated_error());
    }

    let result = parse_screening(&completion.text)?;
    log::info!("✅ [screening] first-pass analysis complete");
    Ok(result)
}

async fn run_detail(request: &DetailRequest, context: &AppContext) -> VisaidResult<DetailResult> {
    validate_request(&request.form_data)?;
    log_analysis_request("detail", &request.form_data);

    let visual_type = request.visual_type;
    let template = context
        .templates
        .get_current(TemplateKind::Detail(visual_type))
        .await;
    let prompt = assemble_prompt(&template.text, &request.form_data);
    log::info!(
        "🤖 [detail:{}] prompt assembled ({} chars); calling completion endpoint",
        visual_type,
        prompt.chars().count()
    );

    let completion = context.completion.complete(prompt, DETAIL_MAX_TOKENS).await?;
    if completion.is_truncated() {
        return Err(truncated_error());
    }

    let result = parse_detail(&completion.text, visual_type)?;
    log::info!("✅ [detail:{}] detail analysis complete", visual_type);
    Ok(result)
}

/// Maps warp rejections to the same flat JSON error shape the handlers use.
pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (status, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found.".to_string())
    } else if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, format!("Invalid request body: {}", e))
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed.".to_string())
    } else {
        log::error!("❌ Unhandled rejection: {:?}", err);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.".to_string())
    };

    Ok(json_with_status(&json!({ "error": message }), status))
}
