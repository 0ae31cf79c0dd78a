use anyhow::Result;
use shipping_calc::core::QuoteBatch;
use shipping_calc::{BatchConfig, BatchQuotePipeline, ErrorCode, LocalStorage, QuoteEngine};
use tempfile::TempDir;

const ORDERS_CSV: &str = "\
order_id,sku,weight_kg,length_cm,width_cm,height_cm,quantity
ORD-100,RICE-5KG,5,,,,1
ORD-100,COFFEE,4,,,,1
ORD-101,LAMPSHADE,0.5,50,40,30,1
ORD-101,CANDLE,0.5,,,,1
ORD-102,BROKEN,0.8,30,20,,1
";

fn write_config(temp_dir: &TempDir, formats: &str) -> Result<BatchConfig> {
    let base = temp_dir.path().to_str().unwrap().replace('\\', "/");
    let input_path = format!("{}/orders.csv", base);
    std::fs::write(&input_path, ORDERS_CSV)?;

    let config_content = format!(
        r#"
[batch]
name = "e2e"
version = "1.0.0"

[input]
path = "{}"

[output]
path = "{}/quotes"
formats = [{}]
"#,
        input_path, base, formats
    );

    let config_path = temp_dir.path().join("batch-quote.toml");
    std::fs::write(&config_path, config_content)?;
    Ok(BatchConfig::from_file(&config_path)?)
}

#[tokio::test]
async fn test_end_to_end_batch_quote() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = write_config(&temp_dir, r#""csv", "json""#)?;

    let pipeline = BatchQuotePipeline::new(LocalStorage::new(".".to_string()), config);
    let output_path = QuoteEngine::new(pipeline).run().await?;
    assert!(output_path.ends_with("quotes"));

    let csv = std::fs::read_to_string(temp_dir.path().join("quotes/quotes.csv"))?;
    assert!(csv.contains("ORD-100,2,QUOTED,9,455,RATE_TABLE"));
    assert!(csv.contains("ORD-101,2,QUOTED,12,635,RATE_TABLE"));
    assert!(csv.contains("ORD-102,1,REJECTED"));
    assert!(csv.contains("VALIDATION_ERROR"));

    let json = std::fs::read(temp_dir.path().join("quotes/quotes.json"))?;
    let batch: QuoteBatch = serde_json::from_slice(&json)?;
    assert_eq!(batch.quotes.len(), 3);
    assert_eq!(batch.quoted_count(), 2);
    assert_eq!(
        batch.quotes[1].display.as_deref(),
        Some("₱635 (12 kg)")
    );
    assert_eq!(batch.quotes[2].error_code, Some(ErrorCode::ValidationError));

    Ok(())
}

#[tokio::test]
async fn test_json_only_output_skips_csv() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = write_config(&temp_dir, r#""json""#)?;

    let pipeline = BatchQuotePipeline::new(LocalStorage::new(".".to_string()), config);
    QuoteEngine::new(pipeline).run().await?;

    assert!(temp_dir.path().join("quotes/quotes.json").exists());
    assert!(!temp_dir.path().join("quotes/quotes.csv").exists());
    Ok(())
}

#[tokio::test]
async fn test_missing_input_file_fails_run() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut config = write_config(&temp_dir, r#""csv""#)?;
    config.input.path = temp_dir
        .path()
        .join("nope.csv")
        .to_string_lossy()
        .into_owned();

    let pipeline = BatchQuotePipeline::new(LocalStorage::new(".".to_string()), config);
    let err = QuoteEngine::new(pipeline).run().await.unwrap_err();
    assert!(matches!(err, shipping_calc::AppError::IoError(_)));
    Ok(())
}
