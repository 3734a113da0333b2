//! Application state types

/// Sign tab UI state
#[derive(Debug, Default)]
pub struct SignState {
    /// Path of the document to submit
    pub document_path: String,
    pub is_loading: bool,
    pub result: Option<String>,
    pub error: Option<String>,
}

impl SignState {
    pub fn clear_results(&mut self) {
        self.result = None;
        self.error = None;
    }
}

/// Verify tab UI state
#[derive(Debug, Default)]
pub struct VerifyState {
    pub document_path: String,
    pub signature_path: String,
    pub is_loading: bool,
    pub result: Option<String>,
    pub error: Option<String>,
}

impl VerifyState {
    pub fn clear_results(&mut self) {
        self.result = None;
        self.error = None;
    }
}
