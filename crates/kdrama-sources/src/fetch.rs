use crate::error::FeedError;
use crate::feed::FeedSource;
use crate::normalize::{normalize_drama, normalize_watch_entry, Normalized, COL_TITLE};
use crate::table::{parse_table, RawRow};
use kdrama_models::{Drama, WatchEntry};
use tracing::{info, warn};

/// Fetch the catalog feed and normalize every row into a [`Drama`]
pub async fn fetch_dramas(source: &dyn FeedSource) -> Result<Vec<Drama>, FeedError> {
    let rows = fetch_rows(source).await?;
    let dramas = normalize_rows(source.name(), &rows, normalize_drama);
    info!(feed = source.name(), rows = rows.len(), dramas = dramas.len(), "Loaded catalog");
    Ok(dramas)
}

/// Fetch the watch-history feed and normalize every row into a [`WatchEntry`]
pub async fn fetch_watch_history(source: &dyn FeedSource) -> Result<Vec<WatchEntry>, FeedError> {
    let rows = fetch_rows(source).await?;
    let entries = normalize_rows(source.name(), &rows, normalize_watch_entry);
    info!(feed = source.name(), rows = rows.len(), entries = entries.len(), "Loaded watch history");
    Ok(entries)
}

async fn fetch_rows(source: &dyn FeedSource) -> Result<Vec<RawRow>, FeedError> {
    let text = source.fetch_text().await?;
    let table = parse_table(&text)?;
    // A header-only or empty document is an empty feed, not a broken one
    if !table.rows.is_empty() {
        table.require_column(COL_TITLE)?;
    }
    Ok(table.rows)
}

fn normalize_rows<T>(
    feed: &str,
    rows: &[RawRow],
    normalize: impl Fn(&RawRow) -> Option<Normalized<T>>,
) -> Vec<T> {
    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        let Some(normalized) = normalize(row) else {
            continue;
        };
        for warning in &normalized.warnings {
            warn!(
                feed,
                line = warning.line,
                field = warning.field,
                value = %warning.value,
                "Dropped field: {}",
                warning.reason
            );
        }
        records.push(normalized.record);
    }
    records
}
