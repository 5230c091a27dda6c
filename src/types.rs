use std::path::PathBuf;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub url: String,
    pub epoch_seconds: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionEntry {
    pub channel_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistEntry {
    pub name: String,
    pub video_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WatchLaterEntry {
    pub video_ids: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    TooFewFields,
    NotAVideoUrl,
    MissingChannelMarker,
    MissingVideoId,
}

/// Outcome of parsing a single source record.
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed<T> {
    Entry(T),
    Skip(SkipReason),
}

#[derive(Debug, PartialEq)]
pub struct StoreContents<T> {
    pub entries: Vec<T>,
    pub skipped: usize,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct Subtitle {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WatchHistoryRecord {
    pub header: String,
    pub title: String,
    pub title_url: String,
    pub subtitles: Vec<Subtitle>,
    pub time: String,
    pub products: Vec<String>,
    pub activity_controls: Vec<String>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct SubscriptionRow {
    pub channel_id: String,
    pub channel_url: String,
    pub channel_title: String,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct PlaylistVideoRow {
    pub video_id: String,
    pub created_at: String,
}

#[derive(Debug, Default, PartialEq)]
pub struct PipelineReport {
    pub source_present: bool,
    pub written: usize,
    pub skipped: usize,
    pub outputs: Vec<PathBuf>,
}

#[derive(Debug, Default)]
pub struct ConversionReport {
    pub output_dir: PathBuf,
    pub history: PipelineReport,
    pub subscriptions: PipelineReport,
    pub playlists: PipelineReport,
    pub watch_later: PipelineReport,
}
