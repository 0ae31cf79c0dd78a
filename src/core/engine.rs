use crate::core::Pipeline;
use crate::utils::error::Result;

/// Runs a quoting pipeline end to end: extract lines, quote orders, write results.
pub struct QuoteEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> QuoteEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting batch quote run");

        let lines = self.pipeline.extract().await?;
        tracing::info!("Extracted {} order lines", lines.len());

        let batch = self.pipeline.transform(lines).await?;
        tracing::info!(
            "Quoted {} orders ({} quoted, {} rejected)",
            batch.quotes.len(),
            batch.quoted_count(),
            batch.rejected_count()
        );

        let output_path = self.pipeline.load(batch).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
