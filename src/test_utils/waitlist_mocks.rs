//! In-memory waitlist repository mocks for HTTP-level tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::waitlist_entry::NewWaitlistEntry,
    use_cases::waitlist::WaitlistRepo,
};

/// In-memory `WaitlistRepo` enforcing the same one-row-per-email rule as the
/// Postgres unique constraint.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    entries: Mutex<Vec<NewWaitlistEntry>>,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything inserted so far, in insertion order.
    pub fn entries(&self) -> Vec<NewWaitlistEntry> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn insert(&self, entry: &NewWaitlistEntry) -> AppResult<()> {
        let mut entries = self.entries.lock().unwrap();
        if entries.iter().any(|e| e.email == entry.email) {
            return Err(AppError::DuplicateEmail);
        }
        entries.push(entry.clone());
        Ok(())
    }
}

/// Repo that always fails with a generic store error.
pub struct FailingWaitlistRepo;

#[async_trait]
impl WaitlistRepo for FailingWaitlistRepo {
    async fn insert(&self, _entry: &NewWaitlistEntry) -> AppResult<()> {
        Err(AppError::Database("simulated store failure".into()))
    }
}
