use crate::types::{StoreContents, WatchLaterEntry};

use super::{playlists_store::parse_video_lines, Store};

pub struct WatchLaterStore;

impl Store for WatchLaterStore {
    type Entry = WatchLaterEntry;

    fn file_name(&self) -> &'static str {
        "Watch_later"
    }

    fn parse(&self, records: Vec<String>) -> StoreContents<WatchLaterEntry> {
        let (video_ids, skipped) = parse_video_lines(records.iter().map(|r| r.as_str()));

        StoreContents {
            entries: vec![WatchLaterEntry { video_ids }],
            skipped,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::stores::Store;

    use super::WatchLaterStore;

    #[test]
    fn it_should_treat_whole_array_as_one_list() {
        let contents = WatchLaterStore.parse(vec![
            "https://www.youtube.com/watch?v=xyz789".to_string(),
            "https://example.com/video".to_string(),
            "https://www.youtube.com/watch?v=second".to_string(),
        ]);

        assert_eq!(contents.entries.len(), 1);
        assert_eq!(
            contents.entries[0].video_ids,
            vec!["xyz789".to_string(), "second".to_string()]
        );
        assert_eq!(contents.skipped, 1);
    }
}
