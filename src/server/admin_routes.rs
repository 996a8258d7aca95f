use std::convert::Infallible;
use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

use crate::config::constants::HISTORY_PREVIEW_CHARS;
use crate::enums::template_kind::TemplateKind;
use crate::errors::{VisaidError, VisaidResult};
use crate::logger::response_logger::preview;
use crate::server::analysis_server::{error_reply, json_with_status, no_cache, AppContext};
use crate::structs::backup_summary::BackupSummary;

#[derive(Deserialize)]
struct SaveTemplateRequest {
    prompt: Option<String>,
}

#[derive(Deserialize)]
struct RestoreRequest {
    version: Option<u32>,
}

/// Admin surface: read, save, reset, restore and list history for every
/// template category. Reachable by anyone who can reach the route.
pub fn routes(
    context: Arc<AppContext>,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    let ctx = warp::any().map(move || Arc::clone(&context));

    let get_template = warp::path!("api" / "admin" / "template" / String)
        .and(warp::get())
        .and(ctx.clone())
        .and_then(get_template_handler);

    let save_template = warp::path!("api" / "admin" / "template" / String)
        .and(warp::post())
        .and(warp::body::json())
        .and(ctx.clone())
        .and_then(save_template_handler);

    let full_template = warp::path!("api" / "admin" / "template" / String / "full")
        .and(warp::get())
        .and(ctx.clone())
        .and_then(full_template_handler);

    let history = warp::path!("api" / "admin" / "template" / String / "history")
        .and(warp::get())
        .and(ctx.clone())
        .and_then(history_handler);

    let restore = warp::path!("api" / "admin" / "template" / String / "restore")
        .and(warp::post())
        .and(warp::body::json())
        .and(ctx.clone())
        .and_then(restore_handler);

    let reset = warp::path!("api" / "admin" / "template" / String / "reset")
        .and(warp::post())
        .and(ctx.clone())
        .and_then(reset_handler);

    let refresh = warp::path!("api" / "admin" / "template" / String / "refresh")
        .and(warp::post())
        .and(ctx)
        .and_then(refresh_handler);

    get_template
        .or(save_template)
        .or(full_template)
        .or(history)
        .or(restore)
        .or(reset)
        .or(refresh)
}

fn parse_kind(key: &str) -> VisaidResult<TemplateKind> {
    TemplateKind::from_key(key).ok_or_else(|| {
        VisaidError::validation_error("kind", &format!("Unknown template category '{}'.", key))
    })
}

type JsonReply = warp::reply::WithStatus<warp::reply::Json>;

async fn get_template_handler(
    kind: String,
    context: Arc<AppContext>,
) -> Result<impl Reply, Infallible> {
    Ok(match get_template(&kind, &context).await {
        Ok(reply) => reply,
        Err(e) => error_reply(&e),
    })
}

async fn get_template(kind: &str, context: &AppContext) -> VisaidResult<JsonReply> {
    let kind = parse_kind(kind)?;
    let current = context.templates.get_current(kind).await;
    Ok(json_with_status(
        &json!({
            "prompt": current.text,
            "lastModified": Utc::now().to_rfc3339(),
        }),
        StatusCode::OK,
    ))
}

async fn save_template_handler(
    kind: String,
    body: SaveTemplateRequest,
    context: Arc<AppContext>,
) -> Result<impl Reply, Infallible> {
    Ok(match save_template(&kind, body, &context).await {
        Ok(reply) => reply,
        Err(e) => error_reply(&e),
    })
}

async fn save_template(
    kind: &str,
    body: SaveTemplateRequest,
    context: &AppContext,
) -> VisaidResult<JsonReply> {
    let kind = parse_kind(kind)?;
    let prompt = body.prompt.unwrap_or_default();
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(VisaidError::validation_error(
            "prompt",
            "The template text must not be empty.",
        ));
    }

    context.templates.set_current(kind, prompt, "admin").await?;
    log::info!("💾 Saved {} template ({} chars)", kind, prompt.chars().count());

    Ok(json_with_status(
        &json!({
            "success": true,
            "message": "Template saved successfully.",
            "savedAt": Utc::now().to_rfc3339(),
        }),
        StatusCode::OK,
    ))
}

async fn full_template_handler(
    kind: String,
    context: Arc<AppContext>,
) -> Result<impl Reply, Infallible> {
    Ok(match full_template(&kind, &context).await {
        Ok(reply) => reply,
        Err(e) => error_reply(&e),
    })
}

/// Whole template plus the character and line counts the admin editor shows.
async fn full_template(kind: &str, context: &AppContext) -> VisaidResult<JsonReply> {
    let kind = parse_kind(kind)?;
    let current = context.templates.get_current(kind).await;
    Ok(json_with_status(
        &json!({
            "prompt": current.text,
            "length": current.text.chars().count(),
            "lines": current.text.split('\n').count(),
            "lastChecked": Utc::now().to_rfc3339(),
        }),
        StatusCode::OK,
    ))
}

async fn history_handler(kind: String, context: Arc<AppContext>) -> Result<impl Reply, Infallible> {
    Ok(match history(&kind, &context).await {
        Ok(reply) => reply,
        Err(e) => error_reply(&e),
    })
}

async fn history(kind: &str, context: &AppContext) -> VisaidResult<JsonReply> {
    let kind = parse_kind(kind)?;
    let entries = context.templates.list_history(kind).await?;
    let backups: Vec<BackupSummary> = entries.iter().map(BackupSummary::from_entry).collect();
    Ok(json_with_status(&json!({ "backups": backups }), StatusCode::OK))
}

async fn restore_handler(
    kind: String,
    body: RestoreRequest,
    context: Arc<AppContext>,
) -> Result<impl Reply, Infallible> {
    Ok(match restore(&kind, body, &context).await {
        Ok(reply) => reply,
        Err(e) => error_reply(&e),
    })
}

async fn restore(
    kind: &str,
    body: RestoreRequest,
    context: &AppContext,
) -> VisaidResult<JsonReply> {
    let kind = parse_kind(kind)?;
    let Some(version) = body.version else {
        return Err(VisaidError::validation_error(
            "version",
            "A valid version number is required.",
        ));
    };

    let restored = context.templates.restore(kind, version, "admin").await?;
    log::info!("⏪ Restored {} template to version {}", kind, version);

    Ok(json_with_status(
        &json!({
            "success": true,
            "message": format!("Restored to version {}.", version),
            "restoredAt": Utc::now().to_rfc3339(),
            "preview": preview(&restored, HISTORY_PREVIEW_CHARS),
        }),
        StatusCode::OK,
    ))
}

async fn reset_handler(kind: String, context: Arc<AppContext>) -> Result<impl Reply, Infallible> {
    Ok(match reset(&kind, &context).await {
        Ok(reply) => reply,
        Err(e) => error_reply(&e),
    })
}

async fn reset(kind: &str, context: &AppContext) -> VisaidResult<JsonReply> {
    let kind = parse_kind(kind)?;
    let seed = context.templates.reset(kind).await?;
    log::info!("🔄 Reset {} template to its seed", kind);

    Ok(json_with_status(
        &json!({
            "success": true,
            "message": "Template reset to its default.",
            "prompt": seed,
            "resetAt": Utc::now().to_rfc3339(),
        }),
        StatusCode::OK,
    ))
}

async fn refresh_handler(kind: String, context: Arc<AppContext>) -> Result<impl Reply, Infallible> {
    let reply = match refresh(&kind, &context).await {
        Ok(reply) => reply,
        Err(e) => error_reply(&e),
    };
    Ok(no_cache(reply))
}

/// Forces a fresh read of the current template, bypassing any client cache.
async fn refresh(kind: &str, context: &AppContext) -> VisaidResult<JsonReply> {
    let kind = parse_kind(kind)?;
    let current = context.templates.get_current(kind).await;
    log::info!(
        "🔁 Refreshed {} template ({} chars)",
        kind,
        current.text.chars().count()
    );

    Ok(json_with_status(
        &json!({
            "success": true,
            "message": "Template refreshed successfully.",
            "promptLength": current.text.chars().count(),
            "refreshedAt": Utc::now().to_rfc3339(),
        }),
        StatusCode::OK,
    ))
}
