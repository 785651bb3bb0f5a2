pub mod error;
pub mod feed;
pub mod fetch;
pub mod normalize;
pub mod table;

pub use error::FeedError;
pub use feed::{create_feed_client, FeedSource, FileFeed, HttpFeed, StaticFeed};
pub use fetch::{fetch_dramas, fetch_watch_history};
pub use normalize::{join_multi, normalize_drama, normalize_watch_entry, split_multi, CoercionWarning, Normalized};
pub use table::{parse_table, RawRow};
