// ../tests/markup.rs
use elden_scout::markup::{Fragment, Span, SpanStyle, format, parse};

fn plain(text: &str) -> Span {
    Span {
        text: text.to_string(),
        style: SpanStyle::Plain,
    }
}

#[test]
fn test_empty_input_gives_empty_output() {
    assert_eq!(format(None), "");
    assert_eq!(format(Some("")), "");
    assert!(parse(None).is_empty());
}

#[test]
fn test_bold_is_applied_before_italic() {
    assert_eq!(
        format(Some("Use **fire** and *holy* damage")),
        "Use <strong>fire</strong> and <em>holy</em> damage"
    );
    assert_eq!(
        format(Some("**strong** then *soft*")),
        "<strong>strong</strong> then <em>soft</em>"
    );
}

#[test]
fn test_headings_match_longest_marker_first() {
    let text = "# Overview\n## Phase one\n### Opening";
    assert_eq!(
        format(Some(text)),
        "<h1>Overview</h1>\n<h2>Phase one</h2>\n<h3>Opening</h3>"
    );
}

#[test]
fn test_ordinal_and_bullet_lines_become_list_items() {
    let text = "1. Dodge the sweep\n12. Punish the recovery\n- Bring **bleed**";
    assert_eq!(
        format(Some(text)),
        concat!(
            "<li>Dodge the sweep</li>\n",
            "<li>Punish the recovery</li>\n",
            "<li>Bring <strong>bleed</strong></li>"
        )
    );
}

#[test]
fn test_unmatched_and_empty_markers_stay_literal() {
    assert_eq!(format(Some("5 * 3 is fifteen")), "5 * 3 is fifteen");
    assert_eq!(format(Some("a **** b")), "a **** b");
    assert_eq!(format(Some("#hashtag")), "#hashtag");
}

#[test]
fn test_parse_heading_with_styled_text() {
    let fragments = parse(Some("## **Margit** the Fell Omen"));
    assert_eq!(fragments.len(), 1);
    let Fragment::Heading { level, spans } = &fragments[0] else {
        panic!("expected a heading, got {:?}", fragments[0]);
    };
    assert_eq!(*level, 2);
    assert_eq!(spans[0].style, SpanStyle::Strong);
    assert_eq!(spans[0].text, "Margit");
    assert_eq!(spans[1], plain(" the Fell Omen"));
}

#[test]
fn test_plain_lines_are_text_fragments() {
    let fragments = parse(Some("Stay close.\nRoll late."));
    assert_eq!(
        fragments,
        vec![
            Fragment::Text {
                spans: vec![plain("Stay close.")]
            },
            Fragment::Text {
                spans: vec![plain("Roll late.")]
            },
        ]
    );
}
