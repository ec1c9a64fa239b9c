//! Presentation table for rendered agenda documents
//!
//! Maps each rendered node type to the class string it carries in HTML
//! output. Defaults follow the product's print view; any entry can be
//! overridden from the `[render.style]` config table.

use serde::{Deserialize, Serialize};

/// Class string per node type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleTable {
    pub h1: String,
    pub h2: String,
    pub h3: String,
    /// Rule drawn beneath every `h3`
    pub h3_rule: String,
    pub p: String,
    pub strong: String,
    pub em: String,
    pub hr: String,
    pub ul: String,
    pub li: String,
    /// Roles grid container
    pub grid: String,
    /// One roles grid column
    pub column: String,
}

impl Default for StyleTable {
    fn default() -> Self {
        Self {
            h1: "text-xl font-bold mb-1 leading-tight".to_string(),
            h2: "text-base font-semibold text-foreground mt-4 mb-2".to_string(),
            h3: "text-[11px] font-bold text-black uppercase tracking-[0.15em] mt-10 mb-3"
                .to_string(),
            h3_rule: "border-t border-border mb-3".to_string(),
            p: "text-sm text-muted-foreground mb-1.5 leading-relaxed".to_string(),
            strong: "font-medium text-foreground".to_string(),
            em: "not-italic font-medium text-foreground".to_string(),
            hr: "border-t-2 border-border/60 my-3".to_string(),
            ul: "space-y-1 mb-2".to_string(),
            li: "text-sm text-muted-foreground".to_string(),
            grid: "grid grid-cols-2 gap-8 mb-6 mt-4".to_string(),
            column: "flex flex-col".to_string(),
        }
    }
}

impl StyleTable {
    /// Class for a heading level; levels past 3 share the `h3` style
    pub fn heading(&self, level: u8) -> &str {
        match level {
            1 => &self.h1,
            2 => &self.h2,
            _ => &self.h3,
        }
    }
}
