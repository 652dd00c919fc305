use crate::models::{Segment, SegmentKind};

/// Marker opening an inline recalled-context block
pub const CONTEXT_OPEN: &str = "<context>";
/// Marker closing an inline recalled-context block
pub const CONTEXT_CLOSE: &str = "</context>";

/// Split a reply into plain-text and recalled-context segments
///
/// Marker pairs are matched left-to-right in a single pass and never nest: the first
/// closing marker after an opening marker ends the block. An opening marker with no
/// closing marker after it, and any stray closing marker, stay in the text untouched.
/// Context content is trimmed; empty text gaps between pairs are dropped.
///
/// The result is never empty. Input without a complete pair comes back as a single text
/// segment equal to the input, so callers always have something to render.
///
/// # Examples
///
/// ```
/// use askwhy::parsers::parse_segments;
/// use askwhy::models::Segment;
///
/// let segments = parse_segments("Yes. <context> you said Tuesday </context> Confirmed.");
/// assert_eq!(
///     segments,
///     vec![
///         Segment::text("Yes. "),
///         Segment::context("you said Tuesday"),
///         Segment::text(" Confirmed."),
///     ]
/// );
/// ```
pub fn parse_segments(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    while let Some(open_rel) = text[cursor..].find(CONTEXT_OPEN) {
        let open = cursor + open_rel;
        let body_start = open + CONTEXT_OPEN.len();

        // Dangling opener: the rest of the input is literal text
        let Some(close_rel) = text[body_start..].find(CONTEXT_CLOSE) else {
            break;
        };
        let close = body_start + close_rel;

        if open > cursor {
            segments.push(Segment::text(&text[cursor..open]));
        }
        segments.push(Segment::context(text[body_start..close].trim()));

        cursor = close + CONTEXT_CLOSE.len();
    }

    if segments.is_empty() {
        return vec![Segment::text(text)];
    }

    if cursor < text.len() {
        segments.push(Segment::text(&text[cursor..]));
    }

    segments
}

/// Rebuild the marked-up source of a segment list
///
/// Context segments are re-wrapped in their markers; the output equals the parsed input
/// except for whitespace trimmed from context content.
pub fn render_segments(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment.kind {
            SegmentKind::Text => out.push_str(&segment.content),
            SegmentKind::Context => {
                out.push_str(CONTEXT_OPEN);
                out.push_str(&segment.content);
                out.push_str(CONTEXT_CLOSE);
            }
        }
    }
    out
}
