//! Minimal HTML table scanner.
//!
//! Result pages are simple server-rendered tables, so rows are located by
//! tag search rather than a full DOM parse. Matching is ASCII
//! case-insensitive; closing tags may be omitted, in which case a cell or
//! row ends where the next one starts.

/// Cell text for every `<tr>` in the first `<tbody>` of `html`.
///
/// Returns `None` when the document has no `<tbody>`. Rows without `<td>`
/// cells (e.g. header rows using `<th>`) are skipped.
#[must_use]
pub fn body_rows(html: &str) -> Option<Vec<Vec<String>>> {
    // ASCII lowercasing keeps byte offsets aligned with `html`.
    let lc = html.to_ascii_lowercase();

    let open = find_tag(&lc, "tbody", 0, lc.len())?;
    let start = lc[open..].find('>').map_or(lc.len(), |i| open + i + 1);
    let end = lc[start..].find("</tbody").map_or(lc.len(), |i| start + i);

    let mut rows = Vec::new();
    for (row_start, row_end) in blocks(&lc, "tr", start, end) {
        let cells: Vec<String> = blocks(&lc, "td", row_start, row_end)
            .map(|(s, e)| cell_text(&html[s..e]))
            .collect();
        if !cells.is_empty() {
            rows.push(cells);
        }
    }
    Some(rows)
}

/// Content ranges of successive `<tag ...>` elements within `[from, end)`.
fn blocks<'a>(
    lc: &'a str,
    tag: &'static str,
    from: usize,
    end: usize,
) -> impl Iterator<Item = (usize, usize)> + 'a {
    let close = format!("</{tag}");
    let mut cursor = from;

    std::iter::from_fn(move || {
        let open = find_tag(lc, tag, cursor, end)?;
        let content_start = lc[open..end].find('>').map_or(end, |i| open + i + 1);

        let next_open = find_tag(lc, tag, content_start, end).unwrap_or(end);
        let content_end = lc[content_start..next_open]
            .find(&close)
            .map_or(next_open, |i| content_start + i);

        cursor = next_open;
        Some((content_start, content_end))
    })
}

/// Byte offset of the next `<tag` opening within `[from, end)`.
///
/// The tag name must be followed by whitespace, `>` or `/`, so searching
/// for `tr` does not match `<track>`.
fn find_tag(lc: &str, tag: &str, from: usize, end: usize) -> Option<usize> {
    let pattern = format!("<{tag}");
    let mut pos = from;
    while pos < end {
        let at = pos + lc.get(pos..end)?.find(&pattern)?;
        let after = at + pattern.len();
        match lc.as_bytes().get(after) {
            Some(b) if b.is_ascii_whitespace() || *b == b'>' || *b == b'/' => return Some(at),
            None => return Some(at),
            _ => pos = after,
        }
    }
    None
}

/// Visible text of a cell: tags removed, common entities decoded,
/// whitespace collapsed.
#[must_use]
pub fn cell_text(inner: &str) -> String {
    let mut out = String::with_capacity(inner.len());
    let mut in_tag = false;
    for ch in inner.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&normalize_entities(&out))
}

fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&#160;", " ")
        .replace("&amp;", "&")
}

fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
