//! Background usage-history load

use std::sync::Arc;

use async_trait::async_trait;
use tokio::task::JoinHandle;

use super::channels::{EventSender, ScreenEvent};
use crate::core::ScreenResult;
use crate::permissions::AppPermissionUsage;

/// Source of permission usage history
#[async_trait]
pub trait UsageSource: Send + Sync {
    /// Usage reports with accesses at or after `begin_millis`
    async fn load_usages(&self, begin_millis: i64) -> ScreenResult<Vec<AppPermissionUsage>>;
}

/// A usage source backed by a fixed list
#[derive(Debug, Clone, Default)]
pub struct StaticUsageSource {
    usages: Vec<AppPermissionUsage>,
}

impl StaticUsageSource {
    /// Create a source that always returns `usages`
    pub fn new(usages: Vec<AppPermissionUsage>) -> Self {
        Self { usages }
    }
}

#[async_trait]
impl UsageSource for StaticUsageSource {
    async fn load_usages(&self, begin_millis: i64) -> ScreenResult<Vec<AppPermissionUsage>> {
        let usages = self
            .usages
            .iter()
            .map(|app| AppPermissionUsage {
                package_name: app.package_name.clone(),
                group_usages: app
                    .group_usages
                    .iter()
                    .filter(|u| u.last_access_time >= begin_millis)
                    .cloned()
                    .collect(),
            })
            .collect();
        Ok(usages)
    }
}

/// Start a usage load; the result arrives as [`ScreenEvent::UsagesLoaded`]
///
/// Fire-and-forget: nothing awaits the handle and there is no cancellation.
pub fn spawn_usage_load(
    source: Arc<dyn UsageSource>,
    begin_millis: i64,
    tx: EventSender,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tracing::debug!("[UsageLoader] loading usages since {}", begin_millis);
        let result = source.load_usages(begin_millis).await;

        if let Err(e) = &result {
            tracing::warn!("[UsageLoader] load failed: {}", e);
        }

        if tx.send(ScreenEvent::UsagesLoaded(result)).is_err() {
            tracing::debug!("[UsageLoader] screen gone before load completed");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScreenError;
    use crate::permissions::GroupUsage;
    use crate::runtime::create_event_channel;

    struct FailingSource;

    #[async_trait]
    impl UsageSource for FailingSource {
        async fn load_usages(&self, _begin_millis: i64) -> ScreenResult<Vec<AppPermissionUsage>> {
            Err(ScreenError::usage_load("service unavailable"))
        }
    }

    #[tokio::test]
    async fn test_load_delivers_through_channel() {
        let (tx, mut rx) = create_event_channel();
        let source = StaticUsageSource::new(vec![AppPermissionUsage::new(
            "com.example.app",
            vec![GroupUsage::new("CAMERA", 500), GroupUsage::new("SMS", 50)],
        )]);

        spawn_usage_load(Arc::new(source), 100, tx).await.unwrap();

        match rx.recv().await.unwrap() {
            ScreenEvent::UsagesLoaded(Ok(usages)) => {
                assert_eq!(usages.len(), 1);
                assert_eq!(usages[0].group_usages, vec![GroupUsage::new("CAMERA", 500)]);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failure_is_delivered() {
        let (tx, mut rx) = create_event_channel();
        spawn_usage_load(Arc::new(FailingSource), 0, tx).await.unwrap();

        let event = rx.recv().await.unwrap();
        assert!(matches!(
            event,
            ScreenEvent::UsagesLoaded(Err(ScreenError::UsageLoad(_)))
        ));
    }

    #[tokio::test]
    async fn test_receiver_dropped_does_not_panic() {
        let (tx, rx) = create_event_channel();
        drop(rx);
        spawn_usage_load(Arc::new(StaticUsageSource::default()), 0, tx)
            .await
            .unwrap();
    }
}
