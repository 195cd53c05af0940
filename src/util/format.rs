//! Display formatting for posts and timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Characters of post content shown in list previews.
pub const PREVIEW_CHARS: usize = 150;

const MONTHS: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

/// Cut `content` to [`PREVIEW_CHARS`] characters, marking the cut with `...`.
#[must_use]
pub fn truncate_content(content: &str) -> String {
    match content.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => content.to_owned(),
    }
}

/// Render a backend timestamp such as `2024-05-01T14:30:00` as `May 1, 2024, 14:30`.
///
/// Anything that does not look like an ISO date is returned unchanged.
#[must_use]
pub fn display_date(raw: &str) -> String {
    parse_timestamp(raw).unwrap_or_else(|| raw.to_owned())
}

fn parse_timestamp(raw: &str) -> Option<String> {
    let (date, time) = match raw.split_once(['T', ' ']) {
        Some((date, time)) => (date, Some(time)),
        None => (raw, None),
    };
    let mut fields = date.splitn(3, '-');
    let year: u32 = fields.next()?.parse().ok()?;
    let month: usize = fields.next()?.parse().ok()?;
    let day: u32 = fields.next()?.parse().ok()?;
    let month_name = MONTHS.get(month.checked_sub(1)?)?;
    let mut out = format!("{month_name} {day}, {year}");
    if let Some(clock) = time.and_then(|t| t.get(..5)).filter(|c| c.as_bytes().get(2) == Some(&b':')) {
        out.push_str(", ");
        out.push_str(clock);
    }
    Some(out)
}

/// `1 like` / `3 likes`.
#[must_use]
pub fn plural(count: u64, noun: &str) -> String {
    if count == 1 { format!("{count} {noun}") } else { format!("{count} {noun}s") }
}

/// Last path segment of a stored filename.
#[must_use]
pub fn file_label(filename: &str) -> &str {
    filename.rsplit('/').next().unwrap_or(filename)
}

/// Download link for an attachment served by the backend.
#[must_use]
pub fn file_href(api_base: &str, filename: &str, url: Option<&str>) -> String {
    match url {
        Some(u) if u.starts_with("http://") || u.starts_with("https://") => u.to_owned(),
        Some(u) if u.starts_with('/') => format!("{api_base}{u}"),
        _ => format!("{api_base}/files/{filename}"),
    }
}
