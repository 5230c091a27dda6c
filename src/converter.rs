use std::{fs, path::Path};

use chrono::{DateTime, Utc};
use tracing::info;

use crate::{
    config::Config,
    error::Result,
    mapping::{map_history, map_playlist_videos, map_subscription},
    stager::stage,
    stores::{
        history_store::HistoryStore, load, playlists_store::PlaylistsStore,
        subscriptions_store::SubscriptionsStore, watch_later_store::WatchLaterStore, STORES_DIR,
    },
    types::{ConversionReport, PipelineReport, WatchHistoryRecord},
    writer::{write_playlist, write_subscriptions, write_watch_history, WATCH_LATER_NAME},
};

pub fn convert(config: &Config) -> Result<ConversionReport> {
    convert_at(config, Utc::now())
}

/// Runs the conversion with `now` as the playlist video timestamp.
pub fn convert_at(config: &Config, now: DateTime<Utc>) -> Result<ConversionReport> {
    let output_dir = config.get_output_dir();
    fs::create_dir_all(output_dir)?;

    let root = stage(config.get_export_path())?;

    let report = process_export_directory(root.path(), config, now)?;

    info!("Conversion finished, output in {}", output_dir.display());

    Ok(report)
}

fn process_export_directory(
    export_root: &Path,
    config: &Config,
    now: DateTime<Utc>,
) -> Result<ConversionReport> {
    let stores_dir = export_root.join(STORES_DIR);
    let output_dir = config.get_output_dir();
    let playlists_dir = config.get_playlists_dir();
    fs::create_dir_all(&playlists_dir)?;

    Ok(ConversionReport {
        output_dir: output_dir.to_path_buf(),
        history: convert_history(&stores_dir, output_dir)?,
        subscriptions: convert_subscriptions(&stores_dir, output_dir)?,
        playlists: convert_playlists(&stores_dir, &playlists_dir, now)?,
        watch_later: convert_watch_later(&stores_dir, &playlists_dir, now)?,
    })
}

fn convert_history(stores_dir: &Path, output_dir: &Path) -> Result<PipelineReport> {
    let contents = match load(&HistoryStore::default(), stores_dir)? {
        Some(contents) => contents,
        None => return Ok(PipelineReport::default()),
    };

    let records = contents
        .entries
        .iter()
        .map(map_history)
        .collect::<Result<Vec<WatchHistoryRecord>>>()?;

    let path = write_watch_history(output_dir, &records)?;
    info!("Wrote {} history entries ({} skipped)", records.len(), contents.skipped);

    Ok(PipelineReport {
        source_present: true,
        written: records.len(),
        skipped: contents.skipped,
        outputs: vec![path],
    })
}

fn convert_subscriptions(stores_dir: &Path, output_dir: &Path) -> Result<PipelineReport> {
    let contents = match load(&SubscriptionsStore, stores_dir)? {
        Some(contents) => contents,
        None => return Ok(PipelineReport::default()),
    };

    let rows: Vec<_> = contents.entries.iter().map(map_subscription).collect();

    let path = write_subscriptions(output_dir, &rows)?;
    info!("Wrote {} subscriptions ({} skipped)", rows.len(), contents.skipped);

    Ok(PipelineReport {
        source_present: true,
        written: rows.len(),
        skipped: contents.skipped,
        outputs: vec![path],
    })
}

fn convert_playlists(
    stores_dir: &Path,
    playlists_dir: &Path,
    now: DateTime<Utc>,
) -> Result<PipelineReport> {
    let contents = match load(&PlaylistsStore, stores_dir)? {
        Some(contents) => contents,
        None => return Ok(PipelineReport::default()),
    };

    let mut report = PipelineReport {
        source_present: true,
        skipped: contents.skipped,
        ..PipelineReport::default()
    };

    for playlist in &contents.entries {
        let rows = map_playlist_videos(&playlist.video_ids, now);

        match write_playlist(playlists_dir, &playlist.name, &rows)? {
            Some(path) => {
                info!("Wrote playlist \"{}\" with {} videos", playlist.name, rows.len());
                report.written += rows.len();
                report.outputs.push(path);
            }
            None => info!("Playlist \"{}\" has no videos, skipping", playlist.name),
        }
    }

    Ok(report)
}

fn convert_watch_later(
    stores_dir: &Path,
    playlists_dir: &Path,
    now: DateTime<Utc>,
) -> Result<PipelineReport> {
    let contents = match load(&WatchLaterStore, stores_dir)? {
        Some(contents) => contents,
        None => return Ok(PipelineReport::default()),
    };

    let mut report = PipelineReport {
        source_present: true,
        skipped: contents.skipped,
        ..PipelineReport::default()
    };

    for watch_later in &contents.entries {
        let rows = map_playlist_videos(&watch_later.video_ids, now);

        if let Some(path) = write_playlist(playlists_dir, WATCH_LATER_NAME, &rows)? {
            info!("Wrote {} watch later videos", rows.len());
            report.written += rows.len();
            report.outputs.push(path);
        }
    }

    Ok(report)
}
