//! Aggregate visitor counts.

use crate::domain::{RepositoryPtr, VisitorStats};
use crate::error::AppResult;
use chrono::{DateTime, Duration, Utc};

#[derive(Clone)]
pub struct StatsService {
    repository: RepositoryPtr,
}

impl StatsService {
    // ---
    pub fn new(repository: RepositoryPtr) -> Self {
        Self { repository }
    }

    pub async fn get_stats(&self) -> AppResult<VisitorStats> {
        self.stats_at(Utc::now()).await
    }

    /// Counts as seen at `now`: everything, the current UTC calendar day, and
    /// the trailing seven days.
    pub async fn stats_at(&self, now: DateTime<Utc>) -> AppResult<VisitorStats> {
        // ---
        let day_start = now
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .map(|t| t.and_utc())
            .unwrap_or(now);
        let day_end = day_start + Duration::days(1);

        let total = self.repository.count_visitors().await?;
        let today = self
            .repository
            .count_visitors_between(day_start, day_end)
            .await?;
        let last_7_days = self
            .repository
            .count_visitors_since(now - Duration::days(7))
            .await?;

        Ok(VisitorStats {
            total,
            today,
            last_7_days,
        })
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::domain::VisitorDetails;
    use crate::services::tests::test_repository;
    use chrono::TimeZone;

    #[tokio::test]
    async fn today_and_ten_days_ago() {
        // ---
        let repository = test_repository().await;
        let stats = StatsService::new(repository.clone());
        let now = Utc::now();
        let details = VisitorDetails::new("Ada", "Lovelace", "meeting");

        repository.insert_visitor(&details, now).await.unwrap();
        repository
            .insert_visitor(&details, now - Duration::days(10))
            .await
            .unwrap();

        let counts = stats.stats_at(now).await.unwrap();
        assert_eq!(
            counts,
            VisitorStats {
                total: 2,
                today: 1,
                last_7_days: 1
            }
        );
    }

    #[tokio::test]
    async fn today_uses_calendar_day_not_trailing_24_hours() {
        // ---
        let repository = test_repository().await;
        let stats = StatsService::new(repository.clone());
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 0, 30, 0).unwrap();
        let details = VisitorDetails::new("Ada", "Lovelace", "meeting");

        // One hour ago is yesterday.
        repository
            .insert_visitor(&details, now - Duration::hours(1))
            .await
            .unwrap();
        repository
            .insert_visitor(&details, now - Duration::minutes(10))
            .await
            .unwrap();

        let counts = stats.stats_at(now).await.unwrap();
        assert_eq!(counts.today, 1);
        assert_eq!(counts.last_7_days, 2);
        assert_eq!(counts.total, 2);
    }

    #[tokio::test]
    async fn empty_store_counts_zero() {
        // ---
        let stats = StatsService::new(test_repository().await);

        let counts = stats.get_stats().await.unwrap();
        assert_eq!(
            counts,
            VisitorStats {
                total: 0,
                today: 0,
                last_7_days: 0
            }
        );
    }
}
