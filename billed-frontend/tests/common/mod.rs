//! Common test doubles for the bill pipeline.
#![allow(dead_code)]

use async_trait::async_trait;
use billed_frontend::error::StoreError;
use billed_frontend::models::{
    Attachment, BillDraft, BillRecord, FileSelected, FormSubmitted, SelectedFile,
};
use billed_frontend::navigation::{Navigator, ProofViewer, Route};
use billed_frontend::services::{Diagnostics, RemoteStore};
use serde_json::json;
use std::fmt::Display;
use std::sync::{Arc, Mutex, Once};
use tokio::sync::Notify;

pub const EMPLOYEE_EMAIL: &str = "employee@test.com";

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("info,billed_frontend=debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// In-memory store with scripted answers. Upload and commit can be held
/// back with a gate until the test releases them.
pub struct MockStore {
    list_result: Result<Vec<BillRecord>, StoreError>,
    attachment_result: Result<Attachment, StoreError>,
    commit_error: Option<StoreError>,
    upload_gate: Option<Arc<Notify>>,
    commit_gate: Option<Arc<Notify>>,
    pub uploads: Mutex<Vec<(SelectedFile, String)>>,
    pub commits: Mutex<Vec<BillDraft>>,
    pub list_calls: Mutex<usize>,
}

impl Default for MockStore {
    fn default() -> Self {
        Self {
            list_result: Ok(Vec::new()),
            attachment_result: Ok(Attachment {
                file_url: "https://test.com/file.jpg".to_string(),
                key: "1234".to_string(),
            }),
            commit_error: None,
            upload_gate: None,
            commit_gate: None,
            uploads: Mutex::new(Vec::new()),
            commits: Mutex::new(Vec::new()),
            list_calls: Mutex::new(0),
        }
    }
}

impl MockStore {
    pub fn with_bills(bills: Vec<BillRecord>) -> Self {
        Self {
            list_result: Ok(bills),
            ..Default::default()
        }
    }

    pub fn failing_list(error: StoreError) -> Self {
        Self {
            list_result: Err(error),
            ..Default::default()
        }
    }

    pub fn failing_upload(error: StoreError) -> Self {
        Self {
            attachment_result: Err(error),
            ..Default::default()
        }
    }

    pub fn failing_commit(mut self, error: StoreError) -> Self {
        self.commit_error = Some(error);
        self
    }

    pub fn gate_upload(mut self, gate: Arc<Notify>) -> Self {
        self.upload_gate = Some(gate);
        self
    }

    pub fn gate_commit(mut self, gate: Arc<Notify>) -> Self {
        self.commit_gate = Some(gate);
        self
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }

    pub fn committed(&self) -> Vec<BillDraft> {
        self.commits.lock().unwrap().clone()
    }
}

#[async_trait]
impl RemoteStore for MockStore {
    async fn list(&self) -> Result<Vec<BillRecord>, StoreError> {
        *self.list_calls.lock().unwrap() += 1;
        self.list_result.clone()
    }

    async fn create_attachment(
        &self,
        file: SelectedFile,
        email: &str,
    ) -> Result<Attachment, StoreError> {
        self.uploads.lock().unwrap().push((file, email.to_string()));
        if let Some(gate) = &self.upload_gate {
            gate.notified().await;
        }
        self.attachment_result.clone()
    }

    async fn commit(&self, draft: &BillDraft) -> Result<BillRecord, StoreError> {
        self.commits.lock().unwrap().push(draft.clone());
        if let Some(gate) = &self.commit_gate {
            gate.notified().await;
        }
        if let Some(error) = &self.commit_error {
            return Err(error.clone());
        }

        Ok(BillRecord {
            id: Some(draft.key.clone().unwrap_or_else(|| "1234".to_string())),
            email: draft.email.clone(),
            expense_type: draft.expense_type.clone(),
            name: draft.name.clone(),
            amount: draft.amount.map(|a| a as f64),
            date: draft.date.clone(),
            vat: draft.vat.clone(),
            pct: Some(draft.pct as f64),
            commentary: draft.commentary.clone(),
            file_url: draft.file_url.clone(),
            file_name: draft.file_name.clone(),
            status: draft.status.as_str().to_string(),
        })
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn on_navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

#[derive(Default)]
pub struct RecordingViewer {
    pub shown: Mutex<Vec<String>>,
}

impl ProofViewer for RecordingViewer {
    fn show(&self, bill_url: &str) {
        self.shown.lock().unwrap().push(bill_url.to_string());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Level {
    Warn,
    Error,
}

#[derive(Default)]
pub struct RecordingDiagnostics {
    pub entries: Mutex<Vec<(Level, String, String)>>,
}

impl RecordingDiagnostics {
    pub fn entries(&self) -> Vec<(Level, String, String)> {
        self.entries.lock().unwrap().clone()
    }

    pub fn count(&self, level: Level) -> usize {
        self.entries().iter().filter(|(l, _, _)| *l == level).count()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn warn(&self, message: &str, details: &dyn Display) {
        self.entries
            .lock()
            .unwrap()
            .push((Level::Warn, message.to_string(), details.to_string()));
    }

    fn error(&self, message: &str, details: &dyn Display) {
        self.entries
            .lock()
            .unwrap()
            .push((Level::Error, message.to_string(), details.to_string()));
    }
}

/// Four bills as the store returns them, unsorted.
pub fn bills_fixture() -> Vec<BillRecord> {
    serde_json::from_value(json!([
        {
            "id": "47qAXb6fIm2zOKkLzMro",
            "vat": "80",
            "fileUrl": "https://test.storage.tld/v0/b/billable-677b6.a…f-1.jpg?alt=media&token=c1640e12-a24b-4b11-ae52-529112e9602a",
            "status": "pending",
            "type": "Hôtel et logement",
            "commentary": "séminaire billed",
            "name": "encore",
            "fileName": "preview-facture-free-201801-pdf-1.jpg",
            "date": "2004-04-04",
            "amount": 400,
            "commentAdmin": "ok",
            "email": "a@a",
            "pct": 20
        },
        {
            "id": "BeKy5Mo4jkmdfPGYpTxZ",
            "vat": "",
            "amount": 100,
            "name": "test1",
            "fileName": "1592770761.jpeg",
            "commentary": "plop",
            "pct": 20,
            "type": "Transports",
            "email": "a@a",
            "fileUrl": "https://test.storage.tld/v0/b/billable-677b6.a…61.jpeg?alt=media&token=7685cd61-c112-42bc-9929-8a799bb82d8b",
            "date": "2001-01-01",
            "status": "refused"
        },
        {
            "id": "UIUZtnPQvnbFnB0ozvJh",
            "name": "test3",
            "email": "a@a",
            "type": "Services en ligne",
            "vat": "60",
            "pct": 20,
            "commentAdmin": "bon bah d'accord",
            "amount": 300,
            "status": "accepted",
            "date": "2003-03-03",
            "commentary": "",
            "fileName": "facture-client-php-exportee-dans-document-pdf-enregistre-sur-disque-dur.png",
            "fileUrl": "https://test.storage.tld/v0/b/billable-677b6.a…dur.png?alt=media&token=571d34cb-9c8f-430a-af52-66221cae1da3"
        },
        {
            "id": "qcCK3SzECmaZAGRrHjaC",
            "status": "refused",
            "pct": 20,
            "amount": 200,
            "email": "a@a",
            "name": "test2",
            "vat": "40",
            "fileName": "preview-facture-free-201801-pdf-1.jpg",
            "date": "2002-02-02",
            "commentAdmin": "pas la bonne facture",
            "commentary": "test2",
            "type": "Restaurants et bars",
            "fileUrl": "https://test.storage.tld/v0/b/billable-677b6.a…f-1.jpg?alt=media&token=4df6ed2c-12c8-42a2-b013-346c1346f732"
        }
    ]))
    .expect("fixture bills deserialize")
}

pub fn jpg_file() -> FileSelected {
    FileSelected::new(SelectedFile {
        name: "C:\\fakepath\\test.jpg".to_string(),
        content_type: "image/jpg".to_string(),
        data: b"test".to_vec(),
    })
}

pub fn filled_form() -> FormSubmitted {
    FormSubmitted {
        expense_type: "Transports".to_string(),
        expense_name: "Vol Paris Londres".to_string(),
        datepicker: "2023-04-15".to_string(),
        amount: "348".to_string(),
        vat: "70".to_string(),
        pct: "20".to_string(),
        commentary: "Voyage d'affaires".to_string(),
    }
}
