use std::fmt;

use crate::enums::visual_type::VisualType;
use crate::prompts;

/// One editable instruction template. `Full` drives the single-call combined
/// analysis; `Screening` drives the first pass; each `Detail` template drives
/// the second pass for its visual type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Full,
    Screening,
    Detail(VisualType),
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 7] = [
        TemplateKind::Full,
        TemplateKind::Screening,
        TemplateKind::Detail(VisualType::Illustration),
        TemplateKind::Detail(VisualType::Photo),
        TemplateKind::Detail(VisualType::Flowchart),
        TemplateKind::Detail(VisualType::Graph),
        TemplateKind::Detail(VisualType::Table),
    ];

    pub fn key(&self) -> &'static str {
        match self {
            TemplateKind::Full => "full",
            TemplateKind::Screening => "screening",
            TemplateKind::Detail(visual_type) => visual_type.key(),
        }
    }

    pub fn from_key(key: &str) -> Option<TemplateKind> {
        match key {
            "full" => Some(TemplateKind::Full),
            "screening" => Some(TemplateKind::Screening),
            other => VisualType::from_key(other).map(TemplateKind::Detail),
        }
    }

    /// Compiled-in template used when the store is unreachable or empty, and
    /// restored by the reset operation.
    pub fn seed(&self) -> &'static str {
        match self {
            TemplateKind::Full => prompts::full_template::FULL_SEED_TEMPLATE,
            TemplateKind::Screening => prompts::screening_template::SCREENING_SEED_TEMPLATE,
            TemplateKind::Detail(VisualType::Illustration) => {
                prompts::detail_templates::ILLUSTRATION_SEED_TEMPLATE
            }
            TemplateKind::Detail(VisualType::Photo) => prompts::detail_templates::PHOTO_SEED_TEMPLATE,
            TemplateKind::Detail(VisualType::Flowchart) => {
                prompts::detail_templates::FLOWCHART_SEED_TEMPLATE
            }
            TemplateKind::Detail(VisualType::Graph) => prompts::detail_templates::GRAPH_SEED_TEMPLATE,
            TemplateKind::Detail(VisualType::Table) => prompts::detail_templates::TABLE_SEED_TEMPLATE,
        }
    }

    /// Tab holding the single current row (A2:B2 = timestamp, content).
    pub fn current_tab(&self) -> String {
        format!("{}_current", self.key())
    }

    /// Append-only tab (A:D = timestamp, version, content, editor).
    pub fn history_tab(&self) -> String {
        format!("{}_history", self.key())
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
