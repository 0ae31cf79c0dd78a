pub mod discount;
pub mod engine;
pub mod fee;
pub mod format;
pub mod shipment;
pub mod weight;

pub use crate::domain::model::{OrderLine, OrderQuote, QuoteBatch};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
