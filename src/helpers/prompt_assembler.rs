use crate::structs::analysis_request::AnalysisRequest;

/// Builds the final prompt: template text, then a fixed-order block of the
/// form fields, then the passage verbatim. No escaping and no length cap.
pub fn assemble_prompt(template: &str, request: &AnalysisRequest) -> String {
    format!(
        "{template}\n\n\
         ### Input Details\n\
         - Subject: {}\n\
         - Grade: {}\n\
         - Area: {}\n\
         - Topic: {}\n\
         - Keywords: {}\n\
         - Text type: {}\n\n\
         ### Passage\n\
         {}",
        field_or_dash(&request.subject),
        field_or_dash(request.grade.as_deref().unwrap_or_default()),
        field_or_dash(request.area.as_deref().unwrap_or_default()),
        field_or_dash(request.topic.as_deref().unwrap_or_default()),
        field_or_dash(request.keywords.as_deref().unwrap_or_default()),
        field_or_dash(request.text_type.as_deref().unwrap_or_default()),
        request.content,
    )
}

fn field_or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}
