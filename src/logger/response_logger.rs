use crate::config::constants::RESPONSE_PREVIEW_CHARS;
use crate::structs::analysis_request::AnalysisRequest;

/// First `max_chars` characters, with an ellipsis when anything was cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars).collect();
    format!("{}...", head)
}

pub fn log_analysis_request(route: &str, request: &AnalysisRequest) {
    log::info!(
        "📝 [{}] analysis requested: subject='{}', passage {} chars",
        route,
        request.subject,
        request.content.chars().count()
    );
}

/// Diagnostics only; the preview never reaches the API caller.
pub fn log_parse_failure(shape: &str, cleaned: &str) {
    log::error!(
        "📄 [{}] cleaned response ({} chars): {}",
        shape,
        cleaned.chars().count(),
        preview(cleaned, RESPONSE_PREVIEW_CHARS)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_returned_whole() {
        assert_eq!(preview("abc", 10), "abc");
    }

    #[test]
    fn long_text_is_cut_with_ellipsis() {
        assert_eq!(preview("abcdef", 3), "abc...");
    }

    #[test]
    fn cuts_on_character_boundaries() {
        assert_eq!(preview("도표와 그래프", 2), "도표...");
    }
}
