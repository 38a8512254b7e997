// Path Relativization
// Common-prefix removal over slash-delimited path segments

/// Compute the suffix of `outer` left over after removing the leading
/// segment run it shares with `inner`.
///
/// Both paths are split into segments on `/`. The shared leading run is
/// dropped from both, comparing segments case-insensitively, and the
/// remaining segments of `outer` are rejoined with `/`. Segments are
/// compared as plain text: `.` and `..` are not normalized and no
/// percent-decoding happens. Empty segments produced by a leading or
/// doubled slash are preserved and compared like any other segment.
///
/// Relativizing a path against itself yields the empty string. With no
/// shared leading segment, `outer` comes back unchanged.
pub fn relativize(inner: &str, outer: &str) -> String {
    let mut inner_segments = inner.split('/').peekable();
    let mut outer_segments = outer.split('/').peekable();

    while let (Some(a), Some(b)) = (inner_segments.peek(), outer_segments.peek()) {
        if !segments_match(a, b) {
            break;
        }
        inner_segments.next();
        outer_segments.next();
    }

    outer_segments.collect::<Vec<_>>().join("/")
}

/// Case-insensitive segment equality using Unicode lowercase folding.
fn segments_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
