//! Slide batch ordering helpers.
//!
//! Slide images are usually exported by screen-capture tools with the video
//! position embedded in the filename (`slide_00-12-30.png`). Batch uploads
//! sort on that extracted position so the returned URL list matches the
//! presentation order; filenames without a recognizable position fall back
//! to natural filename ordering after the timestamped ones.

use std::sync::OnceLock;

use regex::Regex;

/// Matches an `HH:MM:SS`-like substring with `:`, `-`, `_`, or `.` as the
/// separator, e.g. `00:12:30`, `00-12-30`, `01_05_00`.
fn timestamp_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(\d{1,2})[:\-_.](\d{2})[:\-_.](\d{2})").expect("valid timestamp regex")
    })
}

/// Extract a video position in seconds from a slide filename.
///
/// Returns `None` when the filename carries no `HH:MM:SS`-like substring
/// or the minute/second fields are out of range.
pub fn timestamp_from_filename(filename: &str) -> Option<i32> {
    let caps = timestamp_re().captures(filename)?;
    let hours: i32 = caps[1].parse().ok()?;
    let minutes: i32 = caps[2].parse().ok()?;
    let seconds: i32 = caps[3].parse().ok()?;
    if minutes > 59 || seconds > 59 {
        return None;
    }
    Some(hours * 3600 + minutes * 60 + seconds)
}

/// Sort slide filenames into presentation order.
///
/// Filenames with an extractable timestamp come first, ordered by position
/// (ties broken by name); the rest follow in natural filename order.
pub fn sort_slide_filenames<T, F>(items: &mut [T], filename: F)
where
    F: Fn(&T) -> &str,
{
    items.sort_by(|a, b| {
        let (name_a, name_b) = (filename(a), filename(b));
        match (
            timestamp_from_filename(name_a),
            timestamp_from_filename(name_b),
        ) {
            (Some(ta), Some(tb)) => ta.cmp(&tb).then_with(|| name_a.cmp(name_b)),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => name_a.cmp(name_b),
        }
    });
}
