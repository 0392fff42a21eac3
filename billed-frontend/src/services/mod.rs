pub mod bills;
pub mod diagnostics;
pub mod http_store;
pub mod new_bill;
pub mod remote_store;

pub use bills::BillsService;
pub use diagnostics::{Diagnostics, TracingDiagnostics};
pub use http_store::HttpRemoteStore;
pub use new_bill::{AttachmentState, NewBillService};
pub use remote_store::RemoteStore;
