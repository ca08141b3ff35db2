//! Test app state builder for HTTP-level integration testing.

use std::sync::Arc;

use axum::http::HeaderValue;

use crate::{
    adapters::http::app_state::AppState,
    infra::config::AppConfig,
    test_utils::InMemoryWaitlistRepo,
    use_cases::waitlist::{WaitlistRepo, WaitlistUseCases},
};

pub fn create_test_config() -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        cors_origin: HeaderValue::from_static("http://localhost:3000"),
        database_url: None,
    }
}

/// Builder for creating `AppState` backed by in-memory mocks.
///
/// Without a repo the state mirrors the unconfigured-database deployment,
/// where joins degrade to log-only mode.
#[derive(Default)]
pub struct TestAppStateBuilder {
    repo: Option<Arc<dyn WaitlistRepo>>,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repo(mut self, repo: Arc<dyn WaitlistRepo>) -> Self {
        self.repo = Some(repo);
        self
    }

    pub fn build(self) -> AppState {
        AppState {
            config: Arc::new(create_test_config()),
            waitlist_use_cases: Arc::new(WaitlistUseCases::new(self.repo)),
        }
    }

    /// Builds with a fresh `InMemoryWaitlistRepo` and hands it back for
    /// asserting on what got persisted.
    pub fn build_with_memory_repo(self) -> (AppState, Arc<InMemoryWaitlistRepo>) {
        let repo = Arc::new(InMemoryWaitlistRepo::new());
        let app_state = self.with_repo(repo.clone() as Arc<dyn WaitlistRepo>).build();
        (app_state, repo)
    }
}
