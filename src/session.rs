use std::collections::HashMap;

/// At-most-once offer gate for newly created files.
///
/// The host owns the state behind this trait and passes it in by reference;
/// nothing in this crate holds ambient global state.
pub trait OfferGate {
    fn has_been_offered(&self, id: &str) -> bool;
    fn mark_offered(&mut self, id: &str);
}

/// Session-scoped ledger of newly created files and whether each has been
/// offered a template. Lives for the host session and is dropped with it;
/// nothing is persisted.
#[derive(Debug, Default)]
pub struct SessionLedger {
    offered: HashMap<String, bool>,
}

impl SessionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a file-creation event. Re-recording a file that was already
    /// offered does not reopen the offer.
    pub fn record_created(&mut self, id: &str) {
        self.offered.entry(id.to_string()).or_insert(false);
    }

    /// True when the file was recorded as newly created and has not yet
    /// been offered a template. Files the ledger never saw created are
    /// never offered.
    pub fn should_offer(&self, id: &str) -> bool {
        matches!(self.offered.get(id), Some(false))
    }
}

impl OfferGate for SessionLedger {
    fn has_been_offered(&self, id: &str) -> bool {
        matches!(self.offered.get(id), Some(true))
    }

    fn mark_offered(&mut self, id: &str) {
        self.offered.insert(id.to_string(), true);
    }
}
