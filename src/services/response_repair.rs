use serde::Deserialize;

use crate::config::constants::{IMAGE_SOURCE_COUNT, RECOMMENDATION_COUNT, SCREENING_REASON_COUNT};
use crate::enums::visual_type::VisualType;
use crate::errors::{VisaidError, VisaidResult};
use crate::logger::response_logger::log_parse_failure;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::detail_result::DetailResult;
use crate::structs::image_generation_prompt::ImageGenerationPrompt;
use crate::structs::image_source::FreeImageSource;
use crate::structs::reason_summary::ReasonSummary;
use crate::structs::screening_result::ScreeningResult;
use crate::structs::suitability::VisualTypeSuitability;
use crate::structs::visual_recommendation::VisualRecommendation;

const JSON_FENCE_OPEN: &str = "```json";
const FENCE: &str = "```";

/// Expected top-level JSON shape of a completion response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    Combined,
    Screening,
    Detail,
}

impl ResponseShape {
    fn name(&self) -> &'static str {
        match self {
            ResponseShape::Combined => "combined",
            ResponseShape::Screening => "screening",
            ResponseShape::Detail => "detail",
        }
    }

    /// Marker a complete response of this shape ends with. Combined and
    /// screening objects close with a nested map, detail objects with a
    /// single brace.
    fn closing_marker(&self) -> &'static str {
        match self {
            ResponseShape::Combined | ResponseShape::Screening => "}}",
            ResponseShape::Detail => "}",
        }
    }
}

/// Strips markdown fencing and trims a dangling incomplete tail back to the
/// last well-formed closing marker. Anything after the truncation point is
/// lost.
pub fn clean_response(raw: &str, shape: ResponseShape) -> String {
    let mut text = raw.trim();

    if text.starts_with(JSON_FENCE_OPEN) {
        text = text[JSON_FENCE_OPEN.len()..].trim_start();
    }
    if text.ends_with(FENCE) {
        text = text[..text.len() - FENCE.len()].trim_end();
    }
    let text = text.trim();

    if !text.ends_with('}') {
        log::warn!("⚠️ [{}] response JSON is incomplete; attempting repair", shape.name());
        let marker = shape.closing_marker();
        if let Some(index) = text.rfind(marker) {
            if index > 0 {
                return text[..index + marker.len()].to_string();
            }
        }
    }

    text.to_string()
}

fn parse_json<'a, T: Deserialize<'a>>(cleaned: &'a str, shape: ResponseShape) -> VisaidResult<T> {
    serde_json::from_str(cleaned).map_err(|e| {
        log_parse_failure(shape.name(), cleaned);
        VisaidError::parse_error(&classify_parse_error(&e))
    })
}

fn classify_parse_error(error: &serde_json::Error) -> String {
    let base = "Failed to parse the model response.";
    match error.classify() {
        serde_json::error::Category::Eof => {
            format!("{} The response appears to be truncated.", base)
        }
        serde_json::error::Category::Syntax => format!("{} The JSON is malformed.", base),
        _ => base.to_string(),
    }
}

/// Rescales the five suitability values to sum to exactly 100. The rounding
/// residual lands on the first field in declaration order (illustration),
/// which is not re-clamped afterwards.
pub fn normalize_suitability(suitability: &mut VisualTypeSuitability) {
    let total = suitability.total();
    if total == 100 || total == 0 {
        return;
    }

    log::warn!("⚖️ Suitability total is {}%, rescaling to 100%", total);
    let factor = 100.0 / f64::from(total);
    for value in suitability.values_mut() {
        *value = (f64::from(*value) * factor).round() as i32;
    }

    let new_total = suitability.total();
    if new_total != 100 {
        suitability.illustration += 100 - new_total;
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCombined {
    visual_type_suitability: Option<VisualTypeSuitability>,
    visual_recommendations: Option<Vec<VisualRecommendation>>,
}

pub fn parse_combined(raw: &str) -> VisaidResult<AnalysisResult> {
    let cleaned = clean_response(raw, ResponseShape::Combined);
    let parsed: RawCombined = parse_json(&cleaned, ResponseShape::Combined)?;

    let (Some(mut suitability), Some(recommendations)) =
        (parsed.visual_type_suitability, parsed.visual_recommendations)
    else {
        return Err(VisaidError::shape_error(
            "combined",
            "The response is missing required fields.",
        ));
    };

    if recommendations.len() != RECOMMENDATION_COUNT {
        return Err(VisaidError::shape_error(
            "combined",
            "The response must contain exactly 5 visual recommendations.",
        ));
    }

    normalize_suitability(&mut suitability);

    Ok(AnalysisResult {
        visual_type_suitability: suitability,
        visual_recommendations: recommendations,
    })
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawScreening {
    visual_type_suitability: Option<VisualTypeSuitability>,
    reason_summary: Option<Vec<ReasonSummary>>,
}

pub fn parse_screening(raw: &str) -> VisaidResult<ScreeningResult> {
    let cleaned = clean_response(raw, ResponseShape::Screening);
    let parsed: RawScreening = parse_json(&cleaned, ResponseShape::Screening)?;

    let (Some(mut suitability), Some(reason_summary)) =
        (parsed.visual_type_suitability, parsed.reason_summary)
    else {
        return Err(VisaidError::shape_error(
            "screening",
            "The response is missing required fields.",
        ));
    };

    if reason_summary.len() != SCREENING_REASON_COUNT {
        return Err(VisaidError::shape_error(
            "screening",
            "The response must contain exactly 5 recommendation reasons.",
        ));
    }

    normalize_suitability(&mut suitability);

    Ok(ScreeningResult {
        visual_type_suitability: suitability,
        reason_summary,
    })
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDetail {
    // The tag is kept as a plain string: a mismatched or unknown value is
    // overridden with the requested category, not treated as an error.
    #[serde(rename = "type")]
    visual_type: Option<String>,
    #[serde(default)]
    reason: Option<String>,
    #[serde(default)]
    composition: Option<String>,
    #[serde(default)]
    implementation: Option<String>,
    #[serde(default)]
    free_image_sources: Option<Vec<FreeImageSource>>,
    #[serde(default)]
    ai_prompt: Option<String>,
    #[serde(default)]
    image_generation_prompt: Option<ImageGenerationPrompt>,
}

pub fn parse_detail(raw: &str, requested: VisualType) -> VisaidResult<DetailResult> {
    let cleaned = clean_response(raw, ResponseShape::Detail);
    let parsed: RawDetail = parse_json(&cleaned, ResponseShape::Detail)?;

    let Some(tag) = parsed.visual_type else {
        return Err(VisaidError::shape_error(
            "detail",
            "The response is missing its type tag.",
        ));
    };
    if tag != requested.key() {
        log::warn!(
            "⚠️ Detail response tagged '{}' instead of '{}'; overriding",
            tag,
            requested
        );
    }

    let Some(image_generation_prompt) = parsed.image_generation_prompt else {
        return Err(VisaidError::shape_error(
            "detail",
            &format!("The {} response has no imageGenerationPrompt block.", requested),
        ));
    };

    let free_image_sources = match parsed.free_image_sources {
        Some(sources) if sources.len() == IMAGE_SOURCE_COUNT => sources,
        _ => {
            log::warn!("⚠️ Expected exactly 3 image sources; substituting the defaults");
            FreeImageSource::fallback_sources()
        }
    };

    Ok(DetailResult {
        visual_type: requested,
        reason: parsed.reason,
        composition: parsed.composition,
        implementation: parsed.implementation,
        free_image_sources,
        ai_prompt: parsed.ai_prompt,
        image_generation_prompt,
    })
}
