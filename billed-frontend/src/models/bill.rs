use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::lenient;

/// Lifecycle state of a bill. The server owns transitions out of `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Pending,
    Accepted,
    Refused,
}

impl BillStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillStatus::Pending => "pending",
            BillStatus::Accepted => "accepted",
            BillStatus::Refused => "refused",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(BillStatus::Pending),
            "accepted" => Some(BillStatus::Accepted),
            "refused" => Some(BillStatus::Refused),
            _ => None,
        }
    }
}

/// A bill as held by the remote store.
///
/// Every field tolerates absence or a loosely typed value so that one odd
/// record never fails deserialization of the whole list. `status` stays the
/// raw code for the same reason.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BillRecord {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::optional_text"
    )]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub email: String,
    #[serde(rename = "type", deserialize_with = "lenient::text")]
    pub expense_type: String,
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::number")]
    pub amount: Option<f64>,
    #[serde(deserialize_with = "lenient::text")]
    pub date: String,
    #[serde(deserialize_with = "lenient::text")]
    pub vat: String,
    #[serde(deserialize_with = "lenient::number")]
    pub pct: Option<f64>,
    #[serde(deserialize_with = "lenient::text")]
    pub commentary: String,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub file_url: Option<String>,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub file_name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub status: String,
}

/// A bill assembled client-side and not yet committed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillDraft {
    /// Reference returned by the attachment upload; selects the record to
    /// update. Never part of the body.
    #[serde(skip)]
    pub key: Option<String>,
    pub email: String,
    #[serde(rename = "type")]
    pub expense_type: String,
    pub name: String,
    pub amount: Option<i64>,
    pub date: String,
    pub vat: String,
    pub pct: i64,
    pub commentary: String,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub status: BillStatus,
}

/// A bill ready for display: `status` holds the label and `date` the display
/// string, or the raw values when they could not be formatted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayBillRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub email: String,
    #[serde(rename = "type")]
    pub expense_type: String,
    pub name: String,
    pub amount: Option<f64>,
    pub date: String,
    pub vat: String,
    pub pct: Option<f64>,
    pub commentary: String,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub status: String,
    /// Parsed calendar date, kept for ordering in the render layer.
    #[serde(skip)]
    pub calendar_date: Option<NaiveDate>,
}

impl DisplayBillRecord {
    pub fn from_record(
        record: BillRecord,
        date: String,
        status: String,
        calendar_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: record.id,
            email: record.email,
            expense_type: record.expense_type,
            name: record.name,
            amount: record.amount,
            date,
            vat: record.vat,
            pct: record.pct,
            commentary: record.commentary,
            file_url: record.file_url,
            file_name: record.file_name,
            status,
            calendar_date,
        }
    }
}

/// Result of uploading a proof file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub file_url: String,
    pub key: String,
}
