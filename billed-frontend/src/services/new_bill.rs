//! New bill submission: proof upload, draft assembly and optimistic commit.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::task::JoinHandle;

use crate::error::{StoreError, SubmitError};
use crate::models::{
    Attachment, BillDraft, BillRecord, BillStatus, FileSelected, FormSubmitted, SessionContext,
};
use crate::navigation::{Navigator, Route};
use crate::services::diagnostics::Diagnostics;
use crate::services::remote_store::RemoteStore;
use crate::utils::{extension_of, file_name_of, parse_int_prefix};

/// VAT percentage used when the form leaves it empty.
pub const DEFAULT_PCT: i64 = 20;

pub const DEFAULT_ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Where the proof of the in-progress bill stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AttachmentState {
    #[default]
    Empty,
    /// Upload dispatched, not (successfully) settled.
    Selected { file_name: String },
    Uploaded {
        file_name: String,
        file_url: String,
        key: String,
    },
}

#[derive(Debug, Default)]
struct AttachmentTrack {
    /// Bumped on every new selection so that a late upload result for an
    /// older file is discarded.
    selection: u64,
    state: AttachmentState,
}

impl AttachmentTrack {
    fn select(&mut self, file_name: String) -> u64 {
        self.selection += 1;
        self.state = AttachmentState::Selected { file_name };
        self.selection
    }

    fn complete(&mut self, selection: u64, attachment: Attachment) -> bool {
        if selection != self.selection {
            return false;
        }
        let file_name = match &self.state {
            AttachmentState::Selected { file_name } => file_name.clone(),
            _ => return false,
        };
        self.state = AttachmentState::Uploaded {
            file_name,
            file_url: attachment.file_url,
            key: attachment.key,
        };
        true
    }

    fn clear(&mut self) {
        self.selection += 1;
        self.state = AttachmentState::Empty;
    }
}

/// Drives the new-bill screen.
///
/// The attachment track (`handle_change_file`) and the form track
/// (`handle_submit`) are independent: submitting does not wait for an upload
/// still in flight, the draft takes whatever attachment state exists at that
/// moment. Spawns onto the ambient Tokio runtime.
#[derive(Clone)]
pub struct NewBillService {
    store: Arc<dyn RemoteStore>,
    session: SessionContext,
    navigator: Arc<dyn Navigator>,
    diagnostics: Arc<dyn Diagnostics>,
    allowed_extensions: Arc<[String]>,
    attachment: Arc<Mutex<AttachmentTrack>>,
}

impl NewBillService {
    pub fn new(
        store: Arc<dyn RemoteStore>,
        session: SessionContext,
        navigator: Arc<dyn Navigator>,
        diagnostics: Arc<dyn Diagnostics>,
    ) -> Self {
        Self {
            store,
            session,
            navigator,
            diagnostics,
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            attachment: Arc::new(Mutex::new(AttachmentTrack::default())),
        }
    }

    /// The same submitter, sharing the attachment track, that navigates
    /// through `navigator`.
    pub fn with_navigator(&self, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            navigator,
            ..self.clone()
        }
    }

    /// Replace the accepted proof extensions (compared case-insensitively).
    pub fn with_allowed_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allowed_extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim_start_matches('.').to_ascii_lowercase())
            .collect();
        self
    }

    pub fn attachment_state(&self) -> AttachmentState {
        self.track().state.clone()
    }

    fn track(&self) -> MutexGuard<'_, AttachmentTrack> {
        self.attachment
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// A proof file was picked.
    ///
    /// Validation failures are returned immediately and nothing is uploaded.
    /// Otherwise the upload is dispatched and its handle returned; an upload
    /// failure is only reported to diagnostics and leaves the bill without a
    /// proof reference, the form stays submittable.
    pub fn handle_change_file(&self, event: FileSelected) -> Result<JoinHandle<()>, SubmitError> {
        let file = event.file.ok_or(SubmitError::MissingFile)?;
        let file_name = file_name_of(&file.name).to_string();

        if !self.accepts(&file_name) {
            self.track().clear();
            let err = SubmitError::UnsupportedFile {
                file_name,
                allowed: self.allowed_extensions.join(", "),
            };
            self.diagnostics.warn("Rejected proof file", &err);
            return Err(err);
        }

        let selection = self.track().select(file_name.clone());
        tracing::debug!(file_name = %file_name, selection, "Uploading proof file");

        let this = self.clone();
        Ok(tokio::spawn(async move {
            match this.store.create_attachment(file, &this.session.email).await {
                Ok(attachment) => {
                    if !this.track().complete(selection, attachment) {
                        tracing::debug!(selection, "Discarding upload result for a replaced file");
                    }
                }
                Err(err) => this.diagnostics.error("Proof upload failed", &err),
            }
        }))
    }

    fn accepts(&self, file_name: &str) -> bool {
        extension_of(file_name)
            .map(|ext| self.allowed_extensions.iter().any(|allowed| *allowed == ext))
            .unwrap_or(false)
    }

    /// The form was submitted.
    ///
    /// Dispatches the commit without awaiting it, then navigates to the bill
    /// list right away. A commit failure is reported to diagnostics by the
    /// detached task. The returned handle resolves to the committed record,
    /// or `None` when the commit failed.
    pub fn handle_submit(&self, event: FormSubmitted) -> JoinHandle<Option<BillRecord>> {
        let draft = self.build_draft(event);
        self.track().clear();

        let this = self.clone();
        let commit = tokio::spawn(async move {
            match this.commit_bill(&draft).await {
                Ok(record) => Some(record),
                Err(err) => {
                    this.diagnostics.error("Bill commit failed", &err);
                    None
                }
            }
        });

        self.navigator.on_navigate(Route::Bills);
        commit
    }

    /// Assemble a pending draft from the form, the session and the current
    /// attachment state.
    pub fn build_draft(&self, form: FormSubmitted) -> BillDraft {
        let (key, file_url, file_name) = match self.attachment_state() {
            AttachmentState::Uploaded {
                file_name,
                file_url,
                key,
            } => (Some(key), Some(file_url), Some(file_name)),
            AttachmentState::Empty | AttachmentState::Selected { .. } => (None, None, None),
        };

        BillDraft {
            key,
            email: self.session.email.clone(),
            expense_type: form.expense_type,
            name: form.expense_name,
            amount: parse_int_prefix(&form.amount),
            date: form.datepicker,
            vat: form.vat,
            // An empty or zero percentage falls back to the default rate.
            pct: parse_int_prefix(&form.pct)
                .filter(|pct| *pct != 0)
                .unwrap_or(DEFAULT_PCT),
            commentary: form.commentary,
            file_url,
            file_name,
            status: BillStatus::Pending,
        }
    }

    /// Send `draft` to the store and hand back the persisted record.
    pub async fn commit_bill(&self, draft: &BillDraft) -> Result<BillRecord, StoreError> {
        let record = self.store.commit(draft).await?;

        tracing::info!(
            bill_id = ?record.id,
            key = ?draft.key,
            status = draft.status.as_str(),
            "Bill committed"
        );
        Ok(record)
    }
}
