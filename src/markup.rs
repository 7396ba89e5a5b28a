//! Lightweight markup for strategy text.
//!
//! Supports `**strong**`, `*emphasis*`, `#`/`##`/`###` headings and `N.` / `-`
//! list items, one construct per line. There is no nesting of lists, no tables
//! and no code fences. List items are emitted individually; grouping them is
//! left to the renderer.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanStyle {
    Plain,
    Strong,
    Emphasis,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

impl Span {
    fn new(text: impl Into<String>, style: SpanStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Heading { level: u8, spans: Vec<Span> },
    ListItem { spans: Vec<Span> },
    Text { spans: Vec<Span> },
}

impl Fragment {
    pub fn spans(&self) -> &[Span] {
        match self {
            Fragment::Heading { spans, .. }
            | Fragment::ListItem { spans }
            | Fragment::Text { spans } => spans,
        }
    }
}

/// Splits markup into fragments, one per input line.
pub fn parse(text: Option<&str>) -> Vec<Fragment> {
    let Some(text) = text.filter(|text| !text.is_empty()) else {
        return Vec::new();
    };
    text.lines().map(parse_line).collect()
}

/// Renders markup as tagged rich text, one fragment per output line.
pub fn format(text: Option<&str>) -> String {
    parse(text)
        .iter()
        .map(render_fragment)
        .collect::<Vec<_>>()
        .join("\n")
}

fn parse_line(line: &str) -> Fragment {
    let spans = emphasis_pass(strong_pass(line));
    block_pass(spans)
}

/// `**text**` → strong. Unterminated markers stay literal.
fn strong_pass(line: &str) -> Vec<Span> {
    split_delimited(line, "**", SpanStyle::Strong)
}

/// `*text*` → emphasis, only inside text the strong pass left plain.
fn emphasis_pass(spans: Vec<Span>) -> Vec<Span> {
    spans
        .into_iter()
        .flat_map(|span| match span.style {
            SpanStyle::Plain => split_delimited(&span.text, "*", SpanStyle::Emphasis),
            _ => vec![span],
        })
        .collect()
}

fn split_delimited(text: &str, marker: &str, style: SpanStyle) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut rest = text;

    while let Some(open) = rest.find(marker) {
        let after_open = &rest[open + marker.len()..];
        let Some(close) = after_open.find(marker) else {
            break;
        };
        if close == 0 {
            // Empty pair: keep it literal and move past it.
            plain.push_str(&rest[..open + marker.len() * 2]);
            rest = &after_open[marker.len()..];
            continue;
        }
        plain.push_str(&rest[..open]);
        if !plain.is_empty() {
            spans.push(Span::new(std::mem::take(&mut plain), SpanStyle::Plain));
        }
        spans.push(Span::new(&after_open[..close], style));
        rest = &after_open[close + marker.len()..];
    }

    plain.push_str(rest);
    if !plain.is_empty() || spans.is_empty() {
        spans.push(Span::new(plain, SpanStyle::Plain));
    }
    spans
}

/// Line-level rules in precedence order: headings (longest marker first),
/// then ordered items, then bullet items.
fn block_pass(mut spans: Vec<Span>) -> Fragment {
    for (marker, level) in [("### ", 3), ("## ", 2), ("# ", 1)] {
        if strip_leading(&mut spans, |text| text.strip_prefix(marker).map(str::len)) {
            return Fragment::Heading { level, spans };
        }
    }
    if strip_leading(&mut spans, ordinal_body_len) {
        return Fragment::ListItem { spans };
    }
    if strip_leading(&mut spans, |text| text.strip_prefix("- ").map(str::len)) {
        return Fragment::ListItem { spans };
    }
    Fragment::Text { spans }
}

/// Applies `rule` to the first span when it is plain text. The rule returns the
/// length of the text that remains after the line marker.
fn strip_leading(spans: &mut Vec<Span>, rule: impl Fn(&str) -> Option<usize>) -> bool {
    let Some(first) = spans.first_mut() else {
        return false;
    };
    if first.style != SpanStyle::Plain {
        return false;
    }
    let Some(remaining) = rule(&first.text) else {
        return false;
    };
    let start = first.text.len() - remaining;
    first.text.drain(..start);
    if first.text.is_empty() && spans.len() > 1 {
        spans.remove(0);
    }
    true
}

fn ordinal_body_len(text: &str) -> Option<usize> {
    let digits = text.len() - text.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    text[digits..].strip_prefix(". ").map(str::len)
}

fn render_fragment(fragment: &Fragment) -> String {
    let inner: String = fragment.spans().iter().map(render_span).collect();
    match fragment {
        Fragment::Heading { level, .. } => format!("<h{level}>{inner}</h{level}>"),
        Fragment::ListItem { .. } => format!("<li>{inner}</li>"),
        Fragment::Text { .. } => inner,
    }
}

fn render_span(span: &Span) -> String {
    match span.style {
        SpanStyle::Plain => span.text.clone(),
        SpanStyle::Strong => format!("<strong>{}</strong>", span.text),
        SpanStyle::Emphasis => format!("<em>{}</em>", span.text),
    }
}
