// Batch aggregation with progress reporting

use futures::stream::{FuturesUnordered, StreamExt};
use log::debug;

use crate::asset::{AssetCollection, AssetKind};
use crate::loader::AssetFuture;
use crate::AssetError;

/// Identity of the asset that just settled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedAsset {
    pub kind: AssetKind,
    pub key: String,
}

/// One loading progress notification
///
/// For a batch of `N` loads the callback fires exactly `N + 1` times: once
/// with `loaded: None` before any load settles, then once per settlement.
/// `percent` is non-decreasing within a batch and reaches 100 for non-empty
/// batches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    /// Completed percentage, 0 to 100
    pub percent: u8,
    /// The settled asset, or `None` for the initial notification
    pub loaded: Option<LoadedAsset>,
}

/// Await every pending load, reporting progress as each settles, and merge
/// the results into one collection
///
/// Settlement order is unspecified; the collection is unaffected by it except
/// that the last settled entry wins on duplicate keys within a kind. Every
/// loader resolves with a fallback for runtime failures, so the only error
/// this propagates is a precondition violation ([`AssetError::KeyRequired`])
/// in one of the entries, which fails the entire batch.
///
/// An empty `pending` list resolves immediately with an empty collection; the
/// initial notification still fires.
pub async fn load_list<F>(
    pending: Vec<AssetFuture>,
    mut on_progress: F,
) -> Result<AssetCollection, AssetError>
where
    F: FnMut(Progress),
{
    let total = pending.len();

    // The initial notification precedes every settlement.
    on_progress(Progress {
        percent: 0,
        loaded: None,
    });

    let mut collection = AssetCollection::default();
    if total == 0 {
        return Ok(collection);
    }

    let mut remaining: FuturesUnordered<AssetFuture> = pending.into_iter().collect();
    let mut completed = 0usize;

    while let Some(settled) = remaining.next().await {
        let asset = settled?;
        completed += 1;

        debug!(
            "loaded {} '{}' ({completed}/{total})",
            asset.kind(),
            asset.key()
        );
        on_progress(Progress {
            percent: (completed * 100 / total) as u8,
            loaded: Some(LoadedAsset {
                kind: asset.kind(),
                key: asset.key().to_string(),
            }),
        });

        collection.insert(asset);
    }

    Ok(collection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{Asset, AudioBuffer};
    use std::time::Duration;

    fn ready(asset: Asset) -> AssetFuture {
        Box::pin(async move { Ok(asset) })
    }

    fn delayed(asset: Asset, millis: u64) -> AssetFuture {
        Box::pin(async move {
            tokio::time::sleep(Duration::from_millis(millis)).await;
            Ok(asset)
        })
    }

    #[tokio::test]
    async fn test_empty_batch_fires_initial_notification_only() {
        let mut events = Vec::new();
        let collection = load_list(Vec::new(), |p| events.push(p)).await.unwrap();

        assert!(collection.is_empty());
        assert_eq!(
            events,
            vec![Progress {
                percent: 0,
                loaded: None
            }]
        );
    }

    #[tokio::test]
    async fn test_progress_counts_and_is_monotonic() {
        let pending = vec![
            ready(Asset::font("a", "Arial")),
            ready(Asset::font("b", "Arial")),
            ready(Asset::sound("c", AudioBuffer::silent())),
        ];

        let mut events = Vec::new();
        let collection = load_list(pending, |p| events.push(p)).await.unwrap();

        // one initial notification plus one per input
        assert_eq!(events.len(), 4);
        assert_eq!(events[0].percent, 0);
        assert!(events[0].loaded.is_none());
        for pair in events.windows(2) {
            assert!(pair[0].percent <= pair[1].percent);
        }
        assert_eq!(events.last().unwrap().percent, 100);
        assert!(events[1..].iter().all(|p| p.loaded.is_some()));

        assert_eq!(collection.len(), 3);
    }

    #[tokio::test]
    async fn test_progress_reports_settlement_order() {
        // "slow" settles after "fast" regardless of input order
        let pending = vec![
            delayed(Asset::font("slow", "Arial"), 50),
            ready(Asset::font("fast", "Arial")),
        ];

        let mut keys = Vec::new();
        load_list(pending, |p| {
            if let Some(loaded) = p.loaded {
                keys.push(loaded.key);
            }
        })
        .await
        .unwrap();

        assert_eq!(keys, vec!["fast".to_string(), "slow".to_string()]);
    }

    #[tokio::test]
    async fn test_duplicate_key_last_settled_wins() {
        let pending = vec![
            delayed(Asset::font("title", "Bungee"), 50),
            ready(Asset::font("title", "Lobster")),
        ];

        let collection = load_list(pending, |_| {}).await.unwrap();
        assert_eq!(collection.count(AssetKind::Font), 1);
        assert_eq!(collection.font("title"), Some("Bungee"));
    }

    #[tokio::test]
    async fn test_precondition_violation_fails_whole_batch() {
        let bad: AssetFuture = Box::pin(async { Err(AssetError::KeyRequired) });
        let pending = vec![ready(Asset::font("ok", "Arial")), bad];

        let err = load_list(pending, |_| {}).await.unwrap_err();
        assert_eq!(err.to_string(), "key required");
    }

    #[tokio::test]
    async fn test_percent_uses_integer_floor() {
        let pending = vec![
            ready(Asset::font("a", "Arial")),
            ready(Asset::font("b", "Arial")),
            ready(Asset::font("c", "Arial")),
        ];

        let mut percents = Vec::new();
        load_list(pending, |p| percents.push(p.percent)).await.unwrap();

        assert_eq!(percents, vec![0, 33, 66, 100]);
    }
}
