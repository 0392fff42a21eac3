//! Bill list synchronization.

use std::sync::Arc;

use crate::error::StoreError;
use crate::models::{BillRecord, DisplayBillRecord};
use crate::navigation::{Navigator, ProofViewer, Route};
use crate::services::diagnostics::Diagnostics;
use crate::services::remote_store::RemoteStore;
use crate::utils::format::{format_status, parse_date, render_date, Formatted};

/// Fetches and normalizes the connected user's bills and handles the bill
/// list interactions.
#[derive(Clone)]
pub struct BillsService {
    store: Arc<dyn RemoteStore>,
    navigator: Arc<dyn Navigator>,
    viewer: Arc<dyn ProofViewer>,
    diagnostics: Arc<dyn Diagnostics>,
}

impl BillsService {
    pub fn new(
        store: Arc<dyn RemoteStore>,
        navigator: Arc<dyn Navigator>,
        viewer: Arc<dyn ProofViewer>,
        diagnostics: Arc<dyn Diagnostics>,
    ) -> Self {
        Self {
            store,
            navigator,
            viewer,
            diagnostics,
        }
    }

    /// The same pipeline, navigating and opening proofs through other seams.
    pub fn with_navigation(
        &self,
        navigator: Arc<dyn Navigator>,
        viewer: Arc<dyn ProofViewer>,
    ) -> Self {
        Self {
            navigator,
            viewer,
            ..self.clone()
        }
    }

    /// Query the store and format every record for display.
    ///
    /// A store failure is returned unchanged. A field that cannot be
    /// formatted keeps its raw value and is reported to diagnostics; it never
    /// drops the record or fails the batch. Records keep store order.
    pub async fn get_bills(&self) -> Result<Vec<DisplayBillRecord>, StoreError> {
        let records = self.store.list().await?;

        let bills: Vec<DisplayBillRecord> =
            records.into_iter().map(|record| self.to_display(record)).collect();

        tracing::debug!(count = bills.len(), "Bills formatted");
        Ok(bills)
    }

    fn to_display(&self, record: BillRecord) -> DisplayBillRecord {
        let bill_id = record.id.as_deref().unwrap_or("-");

        let date = Formatted::new(&record.date, parse_date);
        let calendar_date = date.value().copied();
        let date = date.map(|d| render_date(&d));
        if let Some(error) = date.error() {
            self.diagnostics.warn(
                "Corrupted bill date, keeping raw value",
                &format_args!("bill {}: {}", bill_id, error),
            );
        }

        let status = Formatted::new(&record.status, format_status);
        if let Some(error) = status.error() {
            self.diagnostics.warn(
                "Unrecognized bill status, keeping raw value",
                &format_args!("bill {}: {}", bill_id, error),
            );
        }

        let date = date.into_display();
        let status = status.into_display();
        DisplayBillRecord::from_record(record, date, status, calendar_date)
    }

    /// The "new bill" button.
    pub fn handle_click_new_bill(&self) {
        self.navigator.on_navigate(Route::NewBill);
    }

    /// The eye icon of a bill: open its proof.
    pub fn handle_click_icon_eye(&self, bill_url: &str) {
        tracing::debug!(bill_url = %bill_url, "Opening bill proof");
        self.viewer.show(bill_url);
    }
}
