use tokio::sync::RwLock;

use crate::model::tutor::TutorModel;

/// Process-local storage. Rows are kept in a `Vec` so listing returns them
/// in insertion order.
pub struct MemoryDb {
    tutors: RwLock<Vec<TutorModel>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        tc_log::info(Some("⚡"), "[Memory] Initializing component");

        Self {
            tutors: RwLock::new(Vec::new()),
        }
    }

    pub(crate) fn tutors(&self) -> &RwLock<Vec<TutorModel>> {
        &self.tutors
    }
}

impl Default for MemoryDb {
    fn default() -> Self {
        Self::new()
    }
}
