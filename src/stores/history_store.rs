use crate::{
    types::{HistoryEntry, Parsed, SkipReason, StoreContents},
    youtube::WATCH_URL_PREFIX,
};

use super::{collect, Store};

pub const HISTORY_DELIMITER: &str = "|||";

const MIN_FIELDS: usize = 4;

/// Splits a history record into `[url, epoch, _, title, ..]`.
pub struct HistoryLineParser {
    delimiter: &'static str,
}

impl Default for HistoryLineParser {
    fn default() -> Self {
        HistoryLineParser {
            delimiter: HISTORY_DELIMITER,
        }
    }
}

impl HistoryLineParser {
    #[cfg(test)]
    pub fn new(delimiter: &'static str) -> Self {
        HistoryLineParser { delimiter }
    }

    pub fn parse_line(&self, line: &str) -> Parsed<HistoryEntry> {
        let parts: Vec<&str> = line.split(self.delimiter).collect();

        if parts.len() < MIN_FIELDS {
            return Parsed::Skip(SkipReason::TooFewFields);
        }

        let url = parts[0];

        if !url.starts_with(WATCH_URL_PREFIX) {
            return Parsed::Skip(SkipReason::NotAVideoUrl);
        }

        Parsed::Entry(HistoryEntry {
            url: url.to_string(),
            epoch_seconds: parts[1].to_string(),
            title: parts[3].to_string(),
        })
    }
}

#[derive(Default)]
pub struct HistoryStore {
    parser: HistoryLineParser,
}

impl Store for HistoryStore {
    type Entry = HistoryEntry;

    fn file_name(&self) -> &'static str {
        "history"
    }

    fn parse(&self, records: Vec<String>) -> StoreContents<HistoryEntry> {
        collect(records.iter().map(|line| self.parser.parse_line(line)))
    }
}
