//! Seams to the screen layer: where the pipeline sends the user next, and
//! the proof viewer it opens.

/// Screens the bill pipeline navigates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Bills,
    NewBill,
}

impl Route {
    /// Opaque identifier understood by the screen router.
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Bills => "#employee/bills",
            Route::NewBill => "#employee/bill/new",
        }
    }
}

pub trait Navigator: Send + Sync {
    fn on_navigate(&self, route: Route);
}

/// Opens the proof attached to a bill.
pub trait ProofViewer: Send + Sync {
    fn show(&self, bill_url: &str);
}
