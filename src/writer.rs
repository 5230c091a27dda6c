use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::{
    error::Result,
    types::{PlaylistVideoRow, SubscriptionRow, WatchHistoryRecord},
};

pub const WATCH_HISTORY_FILE: &str = "watch-history.json";
pub const SUBSCRIPTIONS_FILE: &str = "subscriptions.csv";
pub const WATCH_LATER_NAME: &str = "Watch later";

pub const SUBSCRIPTIONS_HEADER: [&str; 3] = ["Channel ID", "Channel URL", "Channel title"];
pub const PLAYLIST_HEADER: [&str; 2] = ["Video ID", "Playlist video creation timestamp"];

pub fn write_watch_history(output_dir: &Path, records: &[WatchHistoryRecord]) -> Result<PathBuf> {
    let path = output_dir.join(WATCH_HISTORY_FILE);
    let mut writer = BufWriter::new(File::create(&path)?);

    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush()?;

    Ok(path)
}

pub fn write_subscriptions(output_dir: &Path, rows: &[SubscriptionRow]) -> Result<PathBuf> {
    let path = output_dir.join(SUBSCRIPTIONS_FILE);

    write_csv(&path, &SUBSCRIPTIONS_HEADER, rows)?;

    Ok(path)
}

/// Writes `<name> videos.csv`, or nothing when there are no rows.
pub fn write_playlist(
    playlists_dir: &Path,
    name: &str,
    rows: &[PlaylistVideoRow],
) -> Result<Option<PathBuf>> {
    if rows.is_empty() {
        return Ok(None);
    }

    let path = playlists_dir.join(playlist_file_name(name));

    write_csv(&path, &PLAYLIST_HEADER, rows)?;

    Ok(Some(path))
}

pub fn playlist_file_name(name: &str) -> String {
    let safe_name: String = name
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();

    format!("{} videos.csv", safe_name)
}

fn write_csv<T: Serialize>(path: &Path, header: &[&str], rows: &[T]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_path(path)?;

    writer.write_record(header)?;

    for row in rows {
        writer.serialize(row)?;
    }

    writer.flush()?;

    Ok(())
}
