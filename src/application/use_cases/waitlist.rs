use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    application::validators::is_valid_email,
    domain::entities::waitlist_entry::{NewWaitlistEntry, Platform, RevenueBucket},
};

#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    /// Inserts one entry. Fails with `AppError::DuplicateEmail` when the email
    /// is already on the list (unique constraint, checked by the store).
    async fn insert(&self, entry: &NewWaitlistEntry) -> AppResult<()>;
}

/// Raw signup fields as decoded from the request body, before validation.
#[derive(Debug, Clone, Default)]
pub struct WaitlistSubmission {
    pub email: Option<String>,
    pub monthly_revenue: Option<String>,
    pub platform: Option<String>,
    pub biggest_pain: Option<String>,
    pub honeypot: Option<String>,
}

impl WaitlistSubmission {
    /// Normalizes the submission into an insertable candidate.
    ///
    /// The front-end form validates these fields too, but that is a UX
    /// convenience, not a trust boundary.
    pub fn validate(self) -> AppResult<NewWaitlistEntry> {
        // The form ships a hidden field that stays empty for humans.
        if self.honeypot.as_deref().is_some_and(|h| !h.trim().is_empty()) {
            return Err(AppError::InvalidInput("Spam detected".into()));
        }

        let email = self.email.as_deref().map(str::trim).unwrap_or_default();
        let monthly_revenue = self
            .monthly_revenue
            .as_deref()
            .map(str::trim)
            .unwrap_or_default();
        let platform = self.platform.as_deref().map(str::trim).unwrap_or_default();

        if email.is_empty() || monthly_revenue.is_empty() || platform.is_empty() {
            return Err(AppError::InvalidInput("Missing required fields".into()));
        }

        if !is_valid_email(email) {
            return Err(AppError::InvalidInput(
                "Please enter a valid email address".into(),
            ));
        }

        let monthly_revenue = RevenueBucket::from_str(monthly_revenue)
            .map_err(|_| AppError::InvalidInput("Please select your revenue range".into()))?;
        let platform = Platform::from_str(platform)
            .map_err(|_| AppError::InvalidInput("Please select your primary platform".into()))?;

        // Optional free text: whitespace-only collapses to absent, never "".
        let biggest_pain = self
            .biggest_pain
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_owned);

        Ok(NewWaitlistEntry {
            email: email.to_owned(),
            monthly_revenue,
            platform,
            biggest_pain,
        })
    }
}

/// How a successful join was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOutcome {
    /// A row was written to the store.
    Joined,
    /// No store configured; the submission was only logged.
    LoggedOnly,
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Option<Arc<dyn WaitlistRepo>>,
}

impl WaitlistUseCases {
    /// `repo` is `None` when no database is configured; joins then degrade to
    /// log-only mode instead of failing, so the signup form keeps working
    /// before infrastructure exists.
    pub fn new(repo: Option<Arc<dyn WaitlistRepo>>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self, submission))]
    pub async fn join(&self, submission: WaitlistSubmission) -> AppResult<JoinOutcome> {
        let entry = submission.validate()?;

        let Some(repo) = &self.repo else {
            tracing::warn!(
                email = %entry.email,
                monthly_revenue = %entry.monthly_revenue,
                platform = %entry.platform,
                biggest_pain = ?entry.biggest_pain,
                "Database not configured, logging waitlist submission instead"
            );
            return Ok(JoinOutcome::LoggedOnly);
        };

        repo.insert(&entry).await?;
        Ok(JoinOutcome::Joined)
    }
}
