use tracing::debug;

use crate::{
    types::{Parsed, PlaylistEntry, SkipReason, StoreContents},
    youtube::{get_youtube_video_id, WATCH_URL_MARKER},
};

use super::Store;

pub const UNTITLED_PLAYLIST: &str = "Untitled Playlist";

pub struct PlaylistsStore;

/// Extracts the video id from one playlist body line.
pub fn parse_video_line(line: &str) -> Parsed<String> {
    if !line.contains(WATCH_URL_MARKER) {
        return Parsed::Skip(SkipReason::NotAVideoUrl);
    }

    match get_youtube_video_id(line) {
        Some(video_id) => Parsed::Entry(video_id),
        None => Parsed::Skip(SkipReason::MissingVideoId),
    }
}

/// Parses body lines into video ids, returning the ids and the skipped count.
/// Blank lines are neither entries nor skips.
pub fn parse_video_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> (Vec<String>, usize) {
    let mut video_ids = vec![];
    let mut skipped = 0;

    for line in lines.into_iter().filter(|line| !line.trim().is_empty()) {
        match parse_video_line(line) {
            Parsed::Entry(video_id) => video_ids.push(video_id),
            Parsed::Skip(reason) => {
                debug!("Skipping playlist line ({:?}): {}", reason, line);
                skipped += 1;
            }
        }
    }

    (video_ids, skipped)
}

pub fn parse_playlist(blob: &str) -> (PlaylistEntry, usize) {
    let mut lines = blob.split('\n');

    let name = lines
        .next()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .unwrap_or(UNTITLED_PLAYLIST)
        .to_string();

    let (video_ids, skipped) = parse_video_lines(lines);

    (PlaylistEntry { name, video_ids }, skipped)
}

impl Store for PlaylistsStore {
    type Entry = PlaylistEntry;

    fn file_name(&self) -> &'static str {
        "Playlists"
    }

    fn parse(&self, records: Vec<String>) -> StoreContents<PlaylistEntry> {
        let mut contents = StoreContents {
            entries: vec![],
            skipped: 0,
        };

        for blob in &records {
            let (playlist, skipped) = parse_playlist(blob);
            contents.skipped += skipped;
            contents.entries.push(playlist);
        }

        contents
    }
}
