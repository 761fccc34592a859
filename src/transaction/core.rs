//! Defines the core data model for transactions and the validation of new transactions.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

// ============================================================================
// MODELS
// ============================================================================

/// Alias for the integer type used for transaction IDs.
///
/// IDs are the creation time in milliseconds since the Unix epoch.
pub type TransactionId = i64;

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Transactions are immutable once created, they can only be deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent or earned in this transaction.
    ///
    /// `None` when the client sent an amount that is not a number. It is
    /// stored as `null`.
    pub amount: Option<f64>,
    /// The kind of transaction, usually "income" or "expense".
    ///
    /// Any non-empty string is accepted and stored verbatim.
    #[serde(rename = "type")]
    pub kind: String,
    /// The date the transaction was recorded, formatted as `DD.MM.YYYY`.
    pub date: String,
}

/// The fields a client sends to create a transaction.
///
/// Every field is optional so that missing fields can be reported as a
/// [ValidationError] instead of a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionInput {
    /// Text detailing the transaction.
    #[serde(default)]
    pub description: Option<String>,
    /// The amount, usually a JSON number or a numeric string.
    #[serde(default)]
    pub amount: Option<Value>,
    /// The kind of transaction, e.g. "income" or "expense".
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl TransactionInput {
    /// Create an input with every field present.
    pub fn new(description: &str, amount: f64, kind: &str) -> Self {
        Self {
            description: Some(description.to_owned()),
            amount: Some(Value::from(amount)),
            kind: Some(kind.to_owned()),
        }
    }
}

/// A [TransactionInput] that passed [validate_transaction].
///
/// It has everything needed for a [Transaction] except the ID and date, which
/// are assigned at creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidTransaction {
    /// Text detailing the transaction, never empty.
    pub description: String,
    /// The parsed amount, `None` if it was present but not a number.
    pub amount: Option<f64>,
    /// The kind of transaction, never empty.
    pub kind: String,
}

impl ValidTransaction {
    /// Turn the validated fields into a [Transaction] with the given `id`,
    /// recorded at `now`.
    pub fn finalize(self, id: TransactionId, now: OffsetDateTime) -> Transaction {
        Transaction {
            id,
            description: self.description,
            amount: self.amount,
            kind: self.kind,
            date: format_display_date(now),
        }
    }
}

/// The reasons a [TransactionInput] can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The description was missing or empty.
    #[error("description is required")]
    MissingDescription,
    /// The amount was missing, null or an empty string.
    #[error("amount is required")]
    MissingAmount,
    /// The type was missing or empty.
    #[error("type is required")]
    MissingType,
}

// ============================================================================
// VALIDATION
// ============================================================================

/// Check that `input` has every field needed to create a transaction.
///
/// Only presence is checked: the amount may be zero, negative or not a number
/// at all, and the type does not have to be "income" or "expense".
///
/// # Errors
/// Returns the first [ValidationError] found, checking the description, then
/// the amount, then the type.
pub fn validate_transaction(input: TransactionInput) -> Result<ValidTransaction, ValidationError> {
    let description = match input.description {
        Some(description) if !description.is_empty() => description,
        _ => return Err(ValidationError::MissingDescription),
    };

    let amount = parse_amount(input.amount.as_ref())?;

    let kind = match input.kind {
        Some(kind) if !kind.is_empty() => kind,
        _ => return Err(ValidationError::MissingType),
    };

    Ok(ValidTransaction {
        description,
        amount,
        kind,
    })
}

/// Coerce a present amount to a number, or `None` if it has no numeric value.
fn parse_amount(amount: Option<&Value>) -> Result<Option<f64>, ValidationError> {
    let amount = match amount {
        None | Some(Value::Null) => return Err(ValidationError::MissingAmount),
        Some(Value::String(text)) if text.is_empty() => {
            return Err(ValidationError::MissingAmount);
        }
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => parse_float_prefix(text),
        Some(_) => None,
    };

    Ok(amount.filter(|amount| amount.is_finite()))
}

/// Parse the longest prefix of `text` that is a decimal number, ignoring
/// leading whitespace, e.g. "12.50 NZD" parses as 12.5.
fn parse_float_prefix(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let integer_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digit_count = end - integer_start;

    if bytes.get(end) == Some(&b'.') {
        let fraction_start = end + 1;
        let mut fraction_end = fraction_start;
        while fraction_end < bytes.len() && bytes[fraction_end].is_ascii_digit() {
            fraction_end += 1;
        }

        if digit_count > 0 || fraction_end > fraction_start {
            digit_count += fraction_end - fraction_start;
            end = fraction_end;
        }
    }

    if digit_count == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let exponent_digits_start = exponent_end;
        while exponent_end < bytes.len() && bytes[exponent_end].is_ascii_digit() {
            exponent_end += 1;
        }
        if exponent_end > exponent_digits_start {
            end = exponent_end;
        }
    }

    text[..end].parse().ok()
}

// ============================================================================
// DATES
// ============================================================================

/// The display format for transaction dates, e.g. "05.10.2025".
const DISPLAY_DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[day].[month].[year]");

/// Format the date part of `date_time` for display on a transaction.
pub fn format_display_date(date_time: OffsetDateTime) -> String {
    let date = date_time.date();
    date.format(DISPLAY_DATE_FORMAT).unwrap_or_else(|error| {
        tracing::error!("could not format the date {date}: {error}");
        date.to_string()
    })
}

// ============================================================================
// TESTS
// ============================================================================
