use url::form_urlencoded;

pub const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?";
pub const WATCH_URL_MARKER: &str = "youtube.com/watch?v=";
pub const CHANNEL_URL_MARKER: &str = "youtube.com/channel/";
pub const CHANNEL_URL_BASE: &str = "https://www.youtube.com/channel/";
pub const HOME_URL: &str = "https://www.youtube.com/";

const CHANNEL_PATH: &str = "/channel/";

/// Value of the first non-empty `v` query parameter, without any check of its shape.
/// Only the query string is parsed, so scheme-less urls work too.
pub fn get_youtube_video_id(url: &str) -> Option<String> {
    let without_fragment = url.trim().split('#').next()?;
    let (_, query) = without_fragment.split_once('?')?;

    form_urlencoded::parse(query.as_bytes())
        .find(|(name, value)| name == "v" && !value.is_empty())
        .map(|(_, value)| value.into_owned())
}

pub fn get_channel_id(url: &str) -> Option<String> {
    if !url.contains(CHANNEL_URL_MARKER) {
        return None;
    }

    url.rsplit(CHANNEL_PATH).next().map(|id| id.to_string())
}

pub fn channel_url(channel_id: &str) -> String {
    format!("{}{}", CHANNEL_URL_BASE, channel_id)
}

#[cfg(test)]
mod tests {
    use super::{channel_url, get_channel_id, get_youtube_video_id};

    #[test]
    fn it_extracts_video_id() {
        let url = "https://www.youtube.com/watch?v=abc123";
        assert_eq!(get_youtube_video_id(url), Some("abc123".to_string()));
    }

    #[test]
    fn it_extracts_video_id_among_other_params() {
        let url = "https://www.youtube.com/watch?list=PL1&v=abc123&t=42";
        assert_eq!(get_youtube_video_id(url), Some("abc123".to_string()));
    }

    #[test]
    fn it_extracts_video_id_without_scheme() {
        assert_eq!(get_youtube_video_id("www.youtube.com/watch?v=abc"), Some("abc".to_string()));
        assert_eq!(get_youtube_video_id("youtube.com/watch?v=def"), Some("def".to_string()));
        assert_eq!(
            get_youtube_video_id("Watch: https://www.youtube.com/watch?v=ghi"),
            Some("ghi".to_string())
        );
    }

    #[test]
    fn it_ignores_fragment() {
        assert_eq!(
            get_youtube_video_id("https://www.youtube.com/watch?v=abc#t=10"),
            Some("abc".to_string())
        );
        assert_eq!(get_youtube_video_id("https://www.youtube.com/watch#?v=abc"), None);
    }

    #[test]
    fn it_does_not_validate_video_id_shape() {
        let url = "https://www.youtube.com/watch?v=x";
        assert_eq!(get_youtube_video_id(url), Some("x".to_string()));
    }

    #[test]
    fn it_returns_none_without_v_param() {
        assert_eq!(get_youtube_video_id("https://www.youtube.com/watch?t=1"), None);
        assert_eq!(get_youtube_video_id("https://www.youtube.com/watch?v="), None);
        assert_eq!(get_youtube_video_id("https://www.youtube.com/watch"), None);
    }

    #[test]
    fn it_extracts_channel_id_after_last_marker() {
        let url = "https://www.youtube.com/channel/UC123";
        assert_eq!(get_channel_id(url), Some("UC123".to_string()));

        let nested = "https://www.youtube.com/channel/old/channel/UC456";
        assert_eq!(get_channel_id(nested), Some("UC456".to_string()));
    }

    #[test]
    fn it_rejects_channel_without_marker() {
        assert_eq!(get_channel_id("https://www.youtube.com/@someone"), None);
    }

    #[test]
    fn it_builds_channel_url() {
        assert_eq!(channel_url("UC123"), "https://www.youtube.com/channel/UC123");
    }
}
