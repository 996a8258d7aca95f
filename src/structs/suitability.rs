use serde::{Deserialize, Serialize};

use crate::enums::visual_type::VisualType;

/// Suitability percentage per visual type. A fixed struct rather than a
/// string-keyed map so the five categories are exhaustive at compile time.
/// Values are signed: the normalization residual can push the first field
/// below zero on pathological inputs and nothing re-clamps it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualTypeSuitability {
    pub illustration: i32,
    pub photo: i32,
    pub flowchart: i32,
    pub graph: i32,
    pub table: i32,
}

impl VisualTypeSuitability {
    pub fn total(&self) -> i32 {
        self.illustration + self.photo + self.flowchart + self.graph + self.table
    }

    pub fn get(&self, visual_type: VisualType) -> i32 {
        match visual_type {
            VisualType::Illustration => self.illustration,
            VisualType::Photo => self.photo,
            VisualType::Flowchart => self.flowchart,
            VisualType::Graph => self.graph,
            VisualType::Table => self.table,
        }
    }

    /// Fields in declaration order; the first entry is the one that absorbs
    /// the rounding residual during normalization.
    pub fn values_mut(&mut self) -> [&mut i32; 5] {
        [
            &mut self.illustration,
            &mut self.photo,
            &mut self.flowchart,
            &mut self.graph,
            &mut self.table,
        ]
    }
}
