mod inmemory;
mod json;

pub use inmemory::InMemoryActivityRepo;
pub use json::JsonActivityRepo;

use savin_domain::ActivityLogEntry;

#[async_trait::async_trait]
pub trait IActivityRepo: Send + Sync {
    async fn insert(&self, entry: &ActivityLogEntry) -> anyhow::Result<()>;
    async fn find_all(&self) -> Vec<ActivityLogEntry>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::RealSys;
    use chrono::NaiveDate;
    use std::sync::Arc;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_activity_queries() {
        let dir = tempdir().unwrap();
        let repos: Vec<Arc<dyn IActivityRepo>> = vec![
            Arc::new(InMemoryActivityRepo::new()),
            Arc::new(JsonActivityRepo::new(
                dir.path().join("activity_log.json"),
                Arc::new(RealSys {}),
            )),
        ];
        let timestamp = NaiveDate::from_ymd_opt(2021, 2, 21)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();

        for repo in repos {
            let first = ActivityLogEntry::new(
                timestamp,
                "voice_command".into(),
                serde_json::json!({ "query": "open calculator" }),
            );
            let second = ActivityLogEntry::new(timestamp, "unspecified".into(), serde_json::json!({}));
            assert!(repo.insert(&first).await.is_ok());
            assert!(repo.insert(&second).await.is_ok());
            assert_eq!(repo.find_all().await, vec![first, second]);
        }
    }

    #[tokio::test]
    async fn corrupted_log_starts_fresh() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("activity_log.json");
        std::fs::write(&path, "{{{").unwrap();

        let repo = JsonActivityRepo::new(path, Arc::new(RealSys {}));
        assert!(repo.find_all().await.is_empty());

        let entry = ActivityLogEntry::new(
            NaiveDate::from_ymd_opt(2021, 2, 21)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
            "click".into(),
            serde_json::Value::Null,
        );
        repo.insert(&entry).await.unwrap();
        assert_eq!(repo.find_all().await, vec![entry]);
    }
}
