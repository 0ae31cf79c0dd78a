use crate::core::format::format_fee;
use crate::core::shipment::calc_shipment_from_items;
use crate::core::{ConfigProvider, OrderLine, OrderQuote, Pipeline, QuoteBatch, Storage};
use crate::domain::model::ShipmentLineItem;
use crate::utils::error::{AppError, Result};
use std::collections::HashMap;
use std::path::Path;

const CSV_HEADER: [&str; 12] = [
    "order_id",
    "line_count",
    "status",
    "bill_kg",
    "fee",
    "tier",
    "bag_spec",
    "actual_kg",
    "volumetric_kg",
    "display",
    "error_code",
    "error_message",
];

/// Quotes every order in a batch file; lines sharing an `order_id` ship as one parcel.
pub struct BatchQuotePipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> BatchQuotePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn output_file(&self, filename: &str) -> String {
        Path::new(self.config.output_path())
            .join(filename)
            .to_string_lossy()
            .into_owned()
    }
}

/// 依 order_id 分組，保留第一次出現的順序
pub fn group_by_order(lines: Vec<OrderLine>) -> Vec<(String, Vec<OrderLine>)> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<OrderLine>)> = Vec::new();

    for line in lines {
        match index.get(&line.order_id) {
            Some(&i) => groups[i].1.push(line),
            None => {
                index.insert(line.order_id.clone(), groups.len());
                groups.push((line.order_id.clone(), vec![line]));
            }
        }
    }

    groups
}

pub fn quote_order(order_id: String, lines: &[OrderLine]) -> OrderQuote {
    let items: Vec<ShipmentLineItem> = lines.iter().map(OrderLine::to_line_item).collect();

    match calc_shipment_from_items(&items) {
        Ok(resolution) => {
            let shown = format_fee(resolution.fee, resolution.bill_kg);
            tracing::debug!("Order {} quoted at {}", order_id, shown);
            OrderQuote::quoted(order_id, lines.len(), resolution, shown)
        }
        Err(e) => {
            tracing::warn!("Order {} rejected [{}]: {}", order_id, e.code(), e);
            OrderQuote::rejected(order_id, lines.len(), &e)
        }
    }
}

fn parse_csv(data: &[u8]) -> Result<Vec<OrderLine>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(data);

    let mut lines = Vec::new();
    for row in reader.deserialize() {
        let line: OrderLine = row?;
        lines.push(line);
    }
    Ok(lines)
}

fn render_csv(batch: &QuoteBatch) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for quote in &batch.quotes {
        let line_count = quote.line_count.to_string();
        let row: Vec<String> = match &quote.quote {
            Some(resolution) => vec![
                quote.order_id.clone(),
                line_count,
                "QUOTED".to_string(),
                resolution.bill_kg.to_string(),
                resolution.fee.to_string(),
                resolution.tier.as_str().to_string(),
                resolution
                    .bag_spec
                    .map(|spec| spec.as_str().to_string())
                    .unwrap_or_default(),
                resolution.actual_kg.to_string(),
                resolution.volumetric_kg.to_string(),
                quote.display.clone().unwrap_or_default(),
                String::new(),
                String::new(),
            ],
            None => vec![
                quote.order_id.clone(),
                line_count,
                "REJECTED".to_string(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                quote
                    .error_code
                    .map(|code| code.as_str().to_string())
                    .unwrap_or_default(),
                quote.error_message.clone().unwrap_or_default(),
            ],
        };
        writer.write_record(&row)?;
    }

    writer.into_inner().map_err(|e| AppError::ProcessingError {
        message: format!("Failed to flush CSV output: {}", e),
    })
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for BatchQuotePipeline<S, C> {
    async fn extract(&self) -> Result<Vec<OrderLine>> {
        let input_path = self.config.input_path();
        tracing::debug!(
            "Reading {} order lines from {}",
            self.config.input_format(),
            input_path
        );

        let data = self.storage.read_file(input_path).await?;
        let lines = match self.config.input_format() {
            "json" => serde_json::from_slice::<Vec<OrderLine>>(&data)?,
            "csv" => parse_csv(&data)?,
            other => {
                return Err(AppError::InvalidConfigValueError {
                    field: "input.format".to_string(),
                    value: other.to_string(),
                    reason: "Unsupported input format".to_string(),
                })
            }
        };

        Ok(lines)
    }

    async fn transform(&self, lines: Vec<OrderLine>) -> Result<QuoteBatch> {
        let quotes = group_by_order(lines)
            .into_iter()
            .map(|(order_id, order_lines)| quote_order(order_id, &order_lines))
            .collect();

        Ok(QuoteBatch {
            generated_at: chrono::Utc::now(),
            quotes,
        })
    }

    async fn load(&self, batch: QuoteBatch) -> Result<String> {
        for format in self.config.output_formats() {
            let (filename, data) = match format.as_str() {
                "csv" => (self.config.csv_filename(), render_csv(&batch)?),
                "json" => (
                    self.config.json_filename(),
                    serde_json::to_vec_pretty(&batch)?,
                ),
                other => {
                    return Err(AppError::InvalidConfigValueError {
                        field: "output.formats".to_string(),
                        value: other.to_string(),
                        reason: "Unsupported output format".to_string(),
                    })
                }
            };

            let path = self.output_file(filename);
            tracing::debug!("Writing {} ({} bytes)", path, data.len());
            self.storage.write_file(&path, &data).await?;
        }

        Ok(self.config.output_path().to_string())
    }
}
