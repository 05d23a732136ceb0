use crate::core::{Pipeline, TemplateRecord};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        println!("Extracting report templates...");

        // Extract
        let sources = self.pipeline.extract().await?;
        println!("Found {} report files", sources.len());
        self.monitor.log_stats("Extract");

        // Transform
        let result = self.pipeline.transform(sources).await?;
        println!("\nExtracted {} templates", result.templates.len());
        self.monitor.log_stats("Transform");

        let preview: Vec<&TemplateRecord> = result.templates.iter().take(2).collect();
        println!("{}", serde_json::to_string_pretty(&preview)?);

        // Load
        let output_path = self.pipeline.load(result).await?;
        println!("Output saved to: {}", output_path);
        self.monitor.log_stats("Load");

        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
