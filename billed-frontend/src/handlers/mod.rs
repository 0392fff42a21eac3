pub mod app;
pub mod bills;
pub mod new_bill;

use std::sync::{Mutex, PoisonError};

use axum::response::Redirect;

use crate::navigation::{Navigator, ProofViewer, Route};

/// HTTP path serving each screen.
pub fn route_path(route: Route) -> &'static str {
    match route {
        Route::Bills => "/bills",
        Route::NewBill => "/bills/new",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Screen(Route),
    Proof(String),
}

/// Navigator and proof viewer for a single HTTP request: records where the
/// pipeline sent the user so the handler can answer with a redirect.
#[derive(Debug, Default)]
pub struct PendingRedirect {
    destination: Mutex<Option<Destination>>,
}

impl PendingRedirect {
    fn set(&self, destination: Destination) {
        *self
            .destination
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(destination);
    }

    pub fn take(&self) -> Option<Destination> {
        self.destination
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    /// Redirect to the recorded destination, or to `fallback` when nothing
    /// was recorded.
    pub fn redirect_or(&self, fallback: Route) -> Redirect {
        match self.take() {
            Some(Destination::Screen(route)) => Redirect::to(route_path(route)),
            Some(Destination::Proof(url)) => Redirect::to(&url),
            None => Redirect::to(route_path(fallback)),
        }
    }
}

impl Navigator for PendingRedirect {
    fn on_navigate(&self, route: Route) {
        tracing::debug!(route = route.as_str(), "Navigating");
        self.set(Destination::Screen(route));
    }
}

impl ProofViewer for PendingRedirect {
    fn show(&self, bill_url: &str) {
        self.set(Destination::Proof(bill_url.to_string()));
    }
}
