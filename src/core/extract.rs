use crate::domain::model::{ChecklistItem, TemplateRecord, VisualMechanical};
use crate::utils::error::{EtlError, Result};
use regex::Regex;

/// UI placeholder convention carried over verbatim from the report forms:
/// an empty result field means the technician has not picked a value yet.
pub const PLACEHOLDER_RESULT: &str = "Select One";

/// Compiled pattern set for pulling template data out of one report source.
pub struct TemplateExtractor {
    slug_re: Regex,
    items_block_re: Regex,
    item_re: Regex,
}

impl TemplateExtractor {
    pub fn new(boundary_fields: &[String]) -> Result<Self> {
        if boundary_fields.is_empty() {
            return Err(EtlError::ConfigError {
                message: "boundary field list cannot be empty".to_string(),
            });
        }

        let slug_re = Regex::new(r#"reportSlug\s*=\s*['"]([^'"]+)['"]"#)?;

        // 檢查清單陣列以下一個已知同層欄位作為右邊界，不做括號配對
        let boundary = boundary_fields
            .iter()
            .map(|field| regex::escape(field))
            .collect::<Vec<_>>()
            .join("|");
        let items_block_re = Regex::new(&format!(
            r#"(?s)visualInspectionItems:\s*\[(.*?)\],\s*(?:{})"#,
            boundary
        ))?;

        let item_re = Regex::new(
            r#"\{\s*id:\s*['"]([^'"]+)['"],\s*description:\s*['"]([^'"]+)['"],\s*result:\s*['"]([^'"]*)['"]"#,
        )?;

        Ok(Self {
            slug_re,
            items_block_re,
            item_re,
        })
    }

    /// First `reportSlug = '...'` assignment wins; later ones are ignored.
    pub fn slug(&self, content: &str) -> Option<String> {
        self.slug_re
            .captures(content)
            .map(|caps| caps[1].to_string())
    }

    /// Checklist items in source order, or empty when the array cannot be
    /// located with the boundary heuristic.
    pub fn checklist(&self, content: &str) -> Vec<ChecklistItem> {
        let block = match self.items_block_re.captures(content) {
            Some(caps) => caps,
            None => return Vec::new(),
        };

        self.item_re
            .captures_iter(&block[1])
            .map(|caps| {
                let result = &caps[3];
                ChecklistItem {
                    id: caps[1].to_string(),
                    description: caps[2].to_string(),
                    result: if result.is_empty() {
                        PLACEHOLDER_RESULT.to_string()
                    } else {
                        result.to_string()
                    },
                }
            })
            .collect()
    }

    /// Assemble one record, or `None` when the file has no slug.
    pub fn template(&self, content: &str) -> Option<TemplateRecord> {
        let slug = self.slug(content)?;
        let items = self.checklist(content);

        Some(TemplateRecord {
            slug,
            visual_mechanical: if items.is_empty() {
                None
            } else {
                Some(VisualMechanical { items })
            },
        })
    }
}
