pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod navigation;
pub mod services;
pub mod startup;
pub mod utils;

use crate::config::{ProofOrigins, SubmissionSettings};
use crate::handlers::PendingRedirect;
use crate::models::SessionContext;
use crate::services::{BillsService, Diagnostics, NewBillService, RemoteStore, TracingDiagnostics};
use std::sync::Arc;

/// Shared application state: the bill pipeline wired to the HTTP surface.
///
/// Navigation is per request: handlers bind the pipeline to their own
/// `PendingRedirect` through `bills` and `new_bill`.
#[derive(Clone)]
pub struct AppState {
    bills: BillsService,
    new_bill: NewBillService,
    pub proof_origins: Arc<ProofOrigins>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn RemoteStore>,
        session: SessionContext,
        submission: &SubmissionSettings,
    ) -> Self {
        let unbound = Arc::new(PendingRedirect::default());
        let diagnostics: Arc<dyn Diagnostics> = Arc::new(TracingDiagnostics);

        let bills = BillsService::new(
            store.clone(),
            unbound.clone(),
            unbound.clone(),
            diagnostics.clone(),
        );
        let new_bill = NewBillService::new(store, session, unbound, diagnostics)
            .with_allowed_extensions(&submission.allowed_extensions);

        Self {
            bills,
            new_bill,
            proof_origins: Arc::new(ProofOrigins::default()),
        }
    }

    /// Origins the eye icon may redirect to. None are allowed until set.
    pub fn with_proof_origins(mut self, origins: ProofOrigins) -> Self {
        self.proof_origins = Arc::new(origins);
        self
    }

    /// Bill list pipeline navigating into `redirect`.
    pub fn bills(&self, redirect: &Arc<PendingRedirect>) -> BillsService {
        self.bills.with_navigation(redirect.clone(), redirect.clone())
    }

    /// New bill pipeline navigating into `redirect`; the attachment track is
    /// shared across requests.
    pub fn new_bill(&self, redirect: &Arc<PendingRedirect>) -> NewBillService {
        self.new_bill.with_navigator(redirect.clone())
    }
}
