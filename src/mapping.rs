use chrono::{DateTime, Datelike, SecondsFormat, Utc};

use crate::{
    error::{ConvertError, Result},
    types::{
        HistoryEntry, PlaylistVideoRow, Subtitle, SubscriptionEntry, SubscriptionRow,
        WatchHistoryRecord,
    },
    youtube::{channel_url, HOME_URL},
};

pub const HISTORY_HEADER: &str = "YouTube";
pub const HISTORY_TITLE_PREFIX: &str = "Watched ";
pub const UNKNOWN_CHANNEL: &str = "Unknown Channel";
pub const UNKNOWN_CHANNEL_TITLE: &str = "Unknown";
pub const ACTIVITY_CONTROL: &str = "YouTube watch history";

pub fn epoch_to_iso8601_millis(epoch: &str) -> Result<String> {
    let seconds: i64 = epoch
        .trim()
        .parse()
        .map_err(|_| ConvertError::InvalidEpoch(epoch.to_string()))?;

    let time = DateTime::<Utc>::from_timestamp(seconds, 0)
        .filter(|time| (1..=9999).contains(&time.year()))
        .ok_or_else(|| ConvertError::InvalidEpoch(epoch.to_string()))?;

    Ok(time.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string())
}

/// Replaces `=` and `&` with the literal text `\u003d` / `\u0026`.
/// Serialization escapes the backslash once more, the output keeps that form.
pub fn escape_title_url(url: &str) -> String {
    url.replace('=', "\\u003d").replace('&', "\\u0026")
}

pub fn map_history(entry: &HistoryEntry) -> Result<WatchHistoryRecord> {
    Ok(WatchHistoryRecord {
        header: HISTORY_HEADER.to_string(),
        title: format!("{}{}", HISTORY_TITLE_PREFIX, entry.title),
        title_url: escape_title_url(&entry.url),
        subtitles: vec![Subtitle {
            name: UNKNOWN_CHANNEL.to_string(),
            url: HOME_URL.to_string(),
        }],
        time: epoch_to_iso8601_millis(&entry.epoch_seconds)?,
        products: vec![HISTORY_HEADER.to_string()],
        activity_controls: vec![ACTIVITY_CONTROL.to_string()],
    })
}

pub fn map_subscription(entry: &SubscriptionEntry) -> SubscriptionRow {
    SubscriptionRow {
        channel_id: entry.channel_id.clone(),
        channel_url: channel_url(&entry.channel_id),
        channel_title: UNKNOWN_CHANNEL_TITLE.to_string(),
    }
}

/// Always carries six fractional digits, also when the microseconds are zero.
pub fn conversion_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Every video gets the conversion time, the source carries no creation timestamp.
pub fn map_playlist_videos(video_ids: &[String], now: DateTime<Utc>) -> Vec<PlaylistVideoRow> {
    let created_at = conversion_timestamp(now);

    video_ids
        .iter()
        .map(|video_id| PlaylistVideoRow {
            video_id: video_id.clone(),
            created_at: created_at.clone(),
        })
        .collect()
}
