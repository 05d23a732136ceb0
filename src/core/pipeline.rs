use crate::core::extract::TemplateExtractor;
use crate::core::{ConfigProvider, Pipeline, SourceFile, Storage, TransformResult};
use crate::utils::error::Result;

pub struct TemplatePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    extractor: TemplateExtractor,
}

impl<S: Storage, C: ConfigProvider> TemplatePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let extractor = TemplateExtractor::new(config.boundary_fields())?;

        Ok(Self {
            storage,
            config,
            extractor,
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for TemplatePipeline<S, C> {
    async fn extract(&self) -> Result<Vec<SourceFile>> {
        let dir = self.config.reports_dir();
        let suffix = self.config.report_suffix();

        tracing::debug!("Scanning {} for *{} files", dir, suffix);
        let names = self.storage.list_dir(dir).await?;

        let mut files = Vec::new();
        for name in names {
            if !name.ends_with(suffix) {
                continue;
            }

            let path = format!("{}/{}", dir, name);
            let bytes = self.storage.read_file(&path).await?;
            let content = String::from_utf8(bytes)?;

            files.push(SourceFile { name, content });
        }

        tracing::debug!("Found {} report files", files.len());
        Ok(files)
    }

    async fn transform(&self, files: Vec<SourceFile>) -> Result<TransformResult> {
        let mut templates = Vec::new();
        let mut skipped = Vec::new();

        // 逐檔處理，順序跟目錄列舉一致
        for file in files {
            println!("Processing {}...", file.name);

            match self.extractor.template(&file.content) {
                Some(record) => {
                    println!("  ✓ Extracted: {}", record.slug);
                    templates.push(record);
                }
                None => {
                    // 找不到 slug 的檔案直接跳過，不視為錯誤
                    tracing::debug!("No report slug in {}, skipping", file.name);
                    skipped.push(file.name);
                }
            }
        }

        if !skipped.is_empty() {
            tracing::debug!("Skipped {} files without a report slug", skipped.len());
        }

        Ok(TransformResult { templates, skipped })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let output_path = self.config.output_path().to_string();

        let json = if self.config.pretty_output() {
            serde_json::to_string_pretty(&result.templates)?
        } else {
            serde_json::to_string(&result.templates)?
        };

        tracing::debug!(
            "Writing {} templates ({} bytes) to {}",
            result.templates.len(),
            json.len(),
            output_path
        );
        self.storage
            .write_file(&output_path, json.as_bytes())
            .await?;

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::EtlError;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn put_file(&self, path: &str, content: &str) {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), content.as_bytes().to_vec());
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn list_dir(&self, path: &str) -> Result<Vec<String>> {
            let files = self.files.lock().await;
            let prefix = format!("{}/", path);
            let names: Vec<String> = files
                .keys()
                .filter_map(|key| key.strip_prefix(&prefix))
                .map(|name| name.to_string())
                .collect();

            if names.is_empty() {
                return Err(EtlError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("Directory not found: {}", path),
                )));
            }
            Ok(names)
        }

        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                EtlError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        reports_dir: String,
        output_path: String,
        report_suffix: String,
        boundary_fields: Vec<String>,
        pretty: bool,
    }

    impl MockConfig {
        fn new() -> Self {
            Self {
                reports_dir: "reports".to_string(),
                output_path: "generated/templates.json".to_string(),
                report_suffix: "Report.tsx".to_string(),
                boundary_fields: ["ins", "cont", "diel", "test", "comments", "temp", "nameplate"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                pretty: true,
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn reports_dir(&self) -> &str {
            &self.reports_dir
        }

        fn output_path(&self) -> &str {
            &self.output_path
        }

        fn report_suffix(&self) -> &str {
            &self.report_suffix
        }

        fn boundary_fields(&self) -> &[String] {
            &self.boundary_fields
        }

        fn pretty_output(&self) -> bool {
            self.pretty
        }
    }

    const TRANSFORMER_REPORT: &str = r#"
import React, { useState } from 'react';

const TransformerReport = () => {
  const reportSlug = 'transformer-inspection';
  const [formData, setFormData] = useState({
    customer: '',
    visualInspectionItems: [
      { id: '1', description: 'Check bushings', result: '' },
      { id: '2', description: 'Check oil level', result: 'Pass' },
    ], insulationTests: [],
    comments: '',
  });

  return null;
};

export default TransformerReport;
"#;

    const BREAKER_REPORT: &str = r#"
const BreakerReport = () => {
  const reportSlug = 'breaker-maintenance';
  const [formData, setFormData] = useState({ comments: '' });
  return null;
};
"#;

    const SLUGLESS_REPORT: &str = r#"
const DraftReport = () => {
  const [formData, setFormData] = useState({
    visualInspectionItems: [
      { id: '1', description: 'Never extracted', result: '' },
    ], comments: '',
  });
  return null;
};
"#;

    #[tokio::test]
    async fn test_extract_filters_by_suffix() {
        let storage = MockStorage::new();
        storage
            .put_file("reports/TransformerReport.tsx", TRANSFORMER_REPORT)
            .await;
        storage.put_file("reports/helpers.ts", "export {};").await;
        storage
            .put_file("reports/BreakerReport.tsx", BREAKER_REPORT)
            .await;

        let pipeline = TemplatePipeline::new(storage, MockConfig::new()).unwrap();
        let files = pipeline.extract().await.unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.name.ends_with("Report.tsx")));
    }

    #[tokio::test]
    async fn test_extract_missing_directory_is_fatal() {
        let storage = MockStorage::new();
        let pipeline = TemplatePipeline::new(storage, MockConfig::new()).unwrap();

        let result = pipeline.extract().await;
        assert!(matches!(result, Err(EtlError::IoError(_))));
    }

    #[tokio::test]
    async fn test_transform_assembles_full_record() {
        let storage = MockStorage::new();
        let pipeline = TemplatePipeline::new(storage, MockConfig::new()).unwrap();

        let files = vec![SourceFile {
            name: "TransformerReport.tsx".to_string(),
            content: TRANSFORMER_REPORT.to_string(),
        }];

        let result = pipeline.transform(files).await.unwrap();

        assert_eq!(result.templates.len(), 1);
        assert!(result.skipped.is_empty());

        let record = &result.templates[0];
        assert_eq!(record.slug, "transformer-inspection");

        let visual = record.visual_mechanical.as_ref().unwrap();
        assert_eq!(visual.items.len(), 2);
        assert_eq!(visual.items[0].description, "Check bushings");
        assert_eq!(visual.items[0].result, "Select One");
        assert_eq!(visual.items[1].result, "Pass");
    }

    #[tokio::test]
    async fn test_transform_skips_slugless_files() {
        let storage = MockStorage::new();
        let pipeline = TemplatePipeline::new(storage, MockConfig::new()).unwrap();

        let files = vec![
            SourceFile {
                name: "DraftReport.tsx".to_string(),
                content: SLUGLESS_REPORT.to_string(),
            },
            SourceFile {
                name: "BreakerReport.tsx".to_string(),
                content: BREAKER_REPORT.to_string(),
            },
        ];

        let result = pipeline.transform(files).await.unwrap();

        assert_eq!(result.templates.len(), 1);
        assert_eq!(result.templates[0].slug, "breaker-maintenance");
        assert_eq!(result.skipped, vec!["DraftReport.tsx".to_string()]);
    }

    #[tokio::test]
    async fn test_transform_omits_empty_checklist_section() {
        let storage = MockStorage::new();
        let pipeline = TemplatePipeline::new(storage, MockConfig::new()).unwrap();

        let files = vec![SourceFile {
            name: "BreakerReport.tsx".to_string(),
            content: BREAKER_REPORT.to_string(),
        }];

        let result = pipeline.transform(files).await.unwrap();

        assert_eq!(result.templates.len(), 1);
        assert!(result.templates[0].visual_mechanical.is_none());
    }

    #[tokio::test]
    async fn test_load_writes_pretty_json_artifact() {
        let storage = MockStorage::new();
        let pipeline = TemplatePipeline::new(storage.clone(), MockConfig::new()).unwrap();

        let files = vec![
            SourceFile {
                name: "TransformerReport.tsx".to_string(),
                content: TRANSFORMER_REPORT.to_string(),
            },
            SourceFile {
                name: "BreakerReport.tsx".to_string(),
                content: BREAKER_REPORT.to_string(),
            },
        ];

        let transformed = pipeline.transform(files).await.unwrap();
        let output_path = pipeline.load(transformed).await.unwrap();

        assert_eq!(output_path, "generated/templates.json");

        let bytes = storage.get_file("generated/templates.json").await.unwrap();
        let content = String::from_utf8(bytes).unwrap();

        let parsed: Vec<serde_json::Value> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0]["slug"], "transformer-inspection");
        assert_eq!(
            parsed[0]["visual_mechanical"]["items"][0]["result"],
            "Select One"
        );

        // Empty checklist means the key is absent, not null or []
        assert_eq!(parsed[1]["slug"], "breaker-maintenance");
        assert!(parsed[1].get("visual_mechanical").is_none());
    }

    #[tokio::test]
    async fn test_load_compact_output() {
        let storage = MockStorage::new();
        let config = MockConfig {
            pretty: false,
            ..MockConfig::new()
        };
        let pipeline = TemplatePipeline::new(storage.clone(), config).unwrap();

        let transformed = TransformResult {
            templates: vec![crate::core::TemplateRecord {
                slug: "compact".to_string(),
                visual_mechanical: None,
            }],
            skipped: vec![],
        };

        pipeline.load(transformed).await.unwrap();

        let bytes = storage.get_file("generated/templates.json").await.unwrap();
        let content = String::from_utf8(bytes).unwrap();
        assert_eq!(content, r#"[{"slug":"compact"}]"#);
    }
}
