use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 運費計算的錯誤碼，與後端 quote 端點使用相同字串
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ValidationError,
    ManualQuoteRequired,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::ManualQuoteRequired => "MANUAL_QUOTE_REQUIRED",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure channel of the weight and fee resolvers. Closed: there is no third kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShippingCalcError {
    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    ManualQuoteRequired { message: String },
}

impl ShippingCalcError {
    pub fn validation(message: impl Into<String>) -> Self {
        ShippingCalcError::Validation {
            message: message.into(),
        }
    }

    pub fn manual_quote(message: impl Into<String>) -> Self {
        ShippingCalcError::ManualQuoteRequired {
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ShippingCalcError::Validation { .. } => ErrorCode::ValidationError,
            ShippingCalcError::ManualQuoteRequired { .. } => ErrorCode::ManualQuoteRequired,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ShippingCalcError::Validation { message }
            | ShippingCalcError::ManualQuoteRequired { message } => message,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Shipping calculation failed [{code}]: {0}", code = .0.code())]
    ShippingError(#[from] ShippingCalcError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Shipping,
    Configuration,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::ShippingError(_) => ErrorCategory::Shipping,
            AppError::ConfigValidationError { .. }
            | AppError::InvalidConfigValueError { .. }
            | AppError::MissingConfigError { .. } => ErrorCategory::Configuration,
            AppError::CsvError(_)
            | AppError::SerializationError(_)
            | AppError::ProcessingError { .. } => ErrorCategory::Data,
            AppError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 需要人工報價是業務結果，不是程式錯誤
            AppError::ShippingError(ShippingCalcError::ManualQuoteRequired { .. }) => {
                ErrorSeverity::Medium
            }
            AppError::ShippingError(ShippingCalcError::Validation { .. }) => ErrorSeverity::High,
            AppError::ConfigValidationError { .. }
            | AppError::InvalidConfigValueError { .. }
            | AppError::MissingConfigError { .. } => ErrorSeverity::High,
            AppError::CsvError(_)
            | AppError::SerializationError(_)
            | AppError::ProcessingError { .. } => ErrorSeverity::High,
            AppError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AppError::ShippingError(ShippingCalcError::ManualQuoteRequired { .. }) => {
                "Contact support for a custom quote; parcels above 50 kg are priced manually"
                    .to_string()
            }
            AppError::ShippingError(ShippingCalcError::Validation { .. }) => {
                "Check the weight (must be > 0) and give either all three dimensions or none"
                    .to_string()
            }
            AppError::ConfigValidationError { field, .. }
            | AppError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' entry in the configuration", field)
            }
            AppError::MissingConfigError { field } => {
                format!("Add the required '{}' entry to the configuration", field)
            }
            AppError::CsvError(_) => {
                "Make sure the input has the header order_id,sku,weight_kg,length_cm,width_cm,height_cm,quantity"
                    .to_string()
            }
            AppError::SerializationError(_) => "Make sure the input is valid JSON".to_string(),
            AppError::ProcessingError { .. } => "Inspect the input rows and retry".to_string(),
            AppError::IoError(_) => "Check that the file exists and is readable/writable".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::ShippingError(e) => match e {
                ShippingCalcError::Validation { message } => {
                    format!("Invalid shipment input: {}", message)
                }
                ShippingCalcError::ManualQuoteRequired { message } => {
                    format!("Manual quote required: {}", message)
                }
            },
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
