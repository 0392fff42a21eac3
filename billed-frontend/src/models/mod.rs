pub mod bill;
pub mod events;
pub mod session;

pub use bill::{Attachment, BillDraft, BillRecord, BillStatus, DisplayBillRecord};
pub use events::{FileSelected, FormSubmitted, SelectedFile};
pub use session::{SessionContext, UserType};
