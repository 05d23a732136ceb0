use serde::{Deserialize, Serialize};

/// One enumerated report source file, read in full.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub description: String,
    pub result: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualMechanical {
    pub items: Vec<ChecklistItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRecord {
    pub slug: String,
    // 沒有檢查項目時整個鍵省略，而不是輸出空列表
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual_mechanical: Option<VisualMechanical>,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub templates: Vec<TemplateRecord>,
    pub skipped: Vec<String>,
}
