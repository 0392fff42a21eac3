use serde::Deserialize;

/// A proof file picked by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    /// Name as reported by the picker, possibly with a fake path prefix.
    pub name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Payload of a file-input change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileSelected {
    pub file: Option<SelectedFile>,
}

impl FileSelected {
    pub fn new(file: SelectedFile) -> Self {
        Self { file: Some(file) }
    }
}

/// Raw values of the new-bill form at submit time.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormSubmitted {
    pub expense_type: String,
    pub expense_name: String,
    pub datepicker: String,
    pub amount: String,
    pub vat: String,
    pub pct: String,
    pub commentary: String,
}
