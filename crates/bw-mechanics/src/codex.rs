//! Per-session discovery state over the fixed beast lore.

use bw_core::catalog::{self, BEAST_LORE};
use bw_core::{CodexCategory, CodexTemplate};
use serde::Serialize;

use crate::error::{MechError, MechResult};

/// One lore entry and whether it has been found.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodexEntry {
    /// Catalog data.
    #[serde(flatten)]
    pub template: &'static CodexTemplate,
    /// Whether the entry has been discovered.
    pub discovered: bool,
}

/// The codex of one session.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct CodexProgress {
    entries: Vec<CodexEntry>,
}

impl Default for CodexProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl CodexProgress {
    /// Every catalog entry, none discovered.
    pub fn new() -> Self {
        Self {
            entries: BEAST_LORE
                .iter()
                .map(|template| CodexEntry {
                    template,
                    discovered: false,
                })
                .collect(),
        }
    }

    /// Mark an entry discovered. Returns the knowledge it grants, which is
    /// zero when it was already known.
    pub fn discover(&mut self, id: &str) -> MechResult<u32> {
        let template = catalog::lore(id).map_err(|_| MechError::NotFound {
            kind: "codex entry",
            id: id.to_string(),
        })?;
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.template.id == template.id)
            .ok_or_else(|| MechError::NotFound {
                kind: "codex entry",
                id: id.to_string(),
            })?;
        if entry.discovered {
            return Ok(0);
        }
        entry.discovered = true;
        Ok(template.knowledge_value)
    }

    /// All entries in catalog order.
    pub fn entries(&self) -> &[CodexEntry] {
        &self.entries
    }

    /// Entries of one category.
    pub fn by_category(&self, category: CodexCategory) -> impl Iterator<Item = &CodexEntry> {
        self.entries
            .iter()
            .filter(move |e| e.template.category == category)
    }

    /// Number of discovered entries.
    pub fn discovered_count(&self) -> usize {
        self.entries.iter().filter(|e| e.discovered).count()
    }

    /// Number of entries in the codex.
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    /// Knowledge still waiting in undiscovered entries.
    pub fn knowledge_remaining(&self) -> u32 {
        self.entries
            .iter()
            .filter(|e| !e.discovered)
            .map(|e| e.template.knowledge_value)
            .sum()
    }
}
