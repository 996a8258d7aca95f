pub const DEFAULT_SERVER_PORT: u16 = 8080;

pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4.1";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Finish reason reported by the completion endpoint when the token ceiling
/// cut the response off.
pub const FINISH_REASON_LENGTH: &str = "length";

// Per-call output token ceilings
pub const COMBINED_MAX_TOKENS: u32 = 10_000;
pub const SCREENING_MAX_TOKENS: u32 = 3_000;
pub const DETAIL_MAX_TOKENS: u32 = 4_000;

pub const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";
pub const SHEETS_SPREADSHEET_ID_ENV: &str = "GOOGLE_SHEETS_SPREADSHEET_ID";
pub const SHEETS_ACCESS_TOKEN_ENV: &str = "GOOGLE_SHEETS_ACCESS_TOKEN";

pub const CURRENT_HEADER: [&str; 2] = ["timestamp", "template_content"];
pub const HISTORY_HEADER: [&str; 4] = ["timestamp", "version", "template_content", "modified_by"];

/// Cleaned-response prefix kept in the server log when parsing fails.
pub const RESPONSE_PREVIEW_CHARS: usize = 1_000;
/// Template prefix shown in the admin history listing.
pub const HISTORY_PREVIEW_CHARS: usize = 200;

pub const SCREENING_REASON_COUNT: usize = 5;
pub const RECOMMENDATION_COUNT: usize = 5;
pub const IMAGE_SOURCE_COUNT: usize = 3;
