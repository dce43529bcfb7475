// src/sources/youtube.rs

use std::sync::LazyLock;

use regex::Regex;

static SHORT_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"youtu\.be/([a-zA-Z0-9_-]+)").expect("static regex must compile"));

static ANY_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:v=|/)([a-zA-Z0-9_-]{11})").expect("static regex must compile"));

/// Pulls the video id out of a YouTube link.
///
/// Understands `/shorts/<id>`, `youtu.be/<id>` and `watch?v=<id>`; anything else
/// falls back to the first 11-character id after `v=` or `/`.
pub fn video_id(link: &str) -> Option<String> {
    let id = if link.contains("shorts") {
        link.split("shorts/").nth(1)?.split('?').next()?.to_string()
    } else if link.contains("youtu.be") {
        SHORT_LINK.captures(link)?[1].to_string()
    } else if link.contains("watch?v=") {
        link.split("watch?v=").nth(1)?.split('&').next()?.to_string()
    } else {
        ANY_ID.captures(link)?[1].to_string()
    };

    (!id.is_empty()).then_some(id)
}
