use std::{fs, path::Path};

use tracing::{debug, info};

use crate::{
    error::Result,
    types::{Parsed, StoreContents},
};

pub mod history_store;
pub mod playlists_store;
pub mod subscriptions_store;
pub mod watch_later_store;

pub const STORES_DIR: &str = "stores";

/// One category of exported data, kept in a single file under `stores/`.
pub trait Store {
    type Entry;

    fn file_name(&self) -> &'static str;

    fn parse(&self, records: Vec<String>) -> StoreContents<Self::Entry>;
}

/// Reads and parses the store, `None` when its file is absent.
pub fn load<S: Store>(store: &S, stores_dir: &Path) -> Result<Option<StoreContents<S::Entry>>> {
    let path = stores_dir.join(store.file_name());

    match read_records(&path)? {
        Some(records) => {
            info!("Parsing {} records from {}", records.len(), path.display());
            Ok(Some(store.parse(records)))
        }
        None => {
            info!("No {} store at {}, skipping", store.file_name(), path.display());
            Ok(None)
        }
    }
}

pub fn read_records(path: &Path) -> Result<Option<Vec<String>>> {
    if !path.exists() {
        return Ok(None);
    }

    let data = fs::read_to_string(path)?;
    let records: Vec<String> = serde_json::from_str(data.trim())?;

    Ok(Some(records))
}

pub(crate) fn collect<T>(parsed: impl IntoIterator<Item = Parsed<T>>) -> StoreContents<T> {
    let mut contents = StoreContents {
        entries: vec![],
        skipped: 0,
    };

    for outcome in parsed {
        match outcome {
            Parsed::Entry(entry) => contents.entries.push(entry),
            Parsed::Skip(reason) => {
                debug!("Skipping record: {:?}", reason);
                contents.skipped += 1;
            }
        }
    }

    contents
}
