use async_trait::async_trait;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    domain::entities::waitlist_entry::NewWaitlistEntry,
    use_cases::waitlist::WaitlistRepo,
};

#[async_trait]
impl WaitlistRepo for PostgresPersistence {
    async fn insert(&self, entry: &NewWaitlistEntry) -> AppResult<()> {
        // created_at is assigned by the table default; the service never reads
        // entries back, so nothing is returned.
        sqlx::query(
            r#"
                INSERT INTO waitlist (email, monthly_revenue, platform, biggest_pain)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&entry.email)
        .bind(entry.monthly_revenue.as_str())
        .bind(entry.platform.as_str())
        .bind(entry.biggest_pain.as_deref())
        .execute(&self.pool)
        .await
        .map_err(AppError::from)?;
        Ok(())
    }
}
