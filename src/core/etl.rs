use crate::core::{Pipeline, RunOutcome, RunReport};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub const DEFAULT_PREVIEW_LIMIT: usize = 5;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
    preview_limit: usize,
    dry_run: bool,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
            preview_limit: DEFAULT_PREVIEW_LIMIT,
            dry_run: false,
        }
    }

    pub fn with_preview_limit(mut self, preview_limit: usize) -> Self {
        self.preview_limit = preview_limit;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// 缺少輸入檔時不寫任何輸出，回傳 `RunOutcome::SourceMissing`
    pub async fn run(&self) -> Result<RunOutcome> {
        let source = self.pipeline.source().to_string();
        let target = self.pipeline.target().to_string();

        if !self.pipeline.source_exists().await {
            tracing::error!("Input file not found: {}", source);
            println!("Error: {} not found!", source);
            return Ok(RunOutcome::SourceMissing { source });
        }

        tracing::info!("Starting conversion {} -> {}", source, target);
        println!("Reading SQL data from {}...", source);

        // Extract
        let records = self.pipeline.extract().await?;
        let found = records.len();
        println!("Found {} contacts", found);
        self.monitor.log_stats("Extract");

        let sample: Vec<_> = records.iter().take(self.preview_limit).cloned().collect();

        let written = if self.dry_run {
            tracing::info!("🔍 DRY RUN MODE - {} was not written", target);
            println!("Dry run: {} was not written", target);
            0
        } else {
            // Transform
            let result = self.pipeline.transform(records).await?;
            let written = result.records.len();
            self.monitor.log_stats("Transform");

            // Load
            let output_path = self.pipeline.load(result).await?;
            self.monitor.log_stats("Load");

            tracing::info!("Wrote {} contacts to {}", written, output_path);
            println!("Successfully created {} with {} contacts", output_path, written);
            written
        };

        let report = RunReport {
            source,
            target,
            found,
            written,
            sample,
        };

        println!("\nFirst {} contacts:", self.preview_limit);
        for line in report.preview_lines() {
            println!("{}", line);
        }

        self.monitor.log_final_stats();

        if self.dry_run {
            Ok(RunOutcome::DryRun(report))
        } else {
            Ok(RunOutcome::Completed(report))
        }
    }
}
