use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Persisted invoice header. Immutable once created.
///
/// `total_amount` is frozen at generation time. Line items are never
/// persisted; detail reads recompute them from current time entries, so
/// they may drift from this total if entries change after generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub project_id: String,
    pub client_name: String,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Input model for persisting an invoice header.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvoice {
    pub project_id: String,
    pub client_name: String,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub total_amount: Decimal,
}

/// One contributor's billable hours on one task within the billing period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLineItem {
    pub task_id: String,
    pub task_title: String,
    pub phase_name: String,
    pub hours: Decimal,
    pub hourly_rate: Decimal,
    pub amount: Decimal,
    pub user_name: String,
}

/// An invoice header together with its (recomputed) line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceWithLineItems {
    pub invoice: Invoice,
    pub line_items: Vec<InvoiceLineItem>,
}
