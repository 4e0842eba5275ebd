//! End-to-end parsing properties.

use notedown_engine::parsing::{
    Block, InlineNode, parse, parse_fragment,
    blocks::{ListMarker, TextRun},
    inline::{Style, parse_inline, types::plain_text},
    snapshot,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn text(s: &str) -> InlineNode {
    InlineNode::text(s)
}

fn paragraph(s: &str) -> Block {
    Block::Paragraph {
        content: vec![TextRun {
            content: vec![text(s)],
        }],
    }
}

/// Every inline node in a sequence, depth first.
fn walk(nodes: &[InlineNode], out: &mut Vec<InlineNode>) {
    for n in nodes {
        out.push(n.clone());
        if let InlineNode::Styled { content, .. } | InlineNode::Color { content, .. } = n {
            walk(content, out);
        }
    }
}

fn all_inline(nodes: &[InlineNode]) -> Vec<InlineNode> {
    let mut out = vec![];
    walk(nodes, &mut out);
    out
}

#[rstest]
#[case("plain body")]
#[case("# Title\n\n- a\n- b")]
#[case("#> T\nx\n\\#>\n\n| a |\n|---|\n| b |")]
#[case("```\ncode\n```")]
fn meta_never_leaks_into_content(#[case] body: &str) {
    let with_meta = parse(&format!("\\meta k=v\n\n{body}"));
    let without = parse(body);
    assert_eq!(with_meta.content, without.content);
    assert_eq!(with_meta.meta.get("k").map(String::as_str), Some("v"));
    assert!(without.meta.is_empty());
}

#[test]
fn meta_section_closes_at_first_content_line() {
    let doc = parse("\\meta a=1\n\n\\meta b=2\ntext\n\\meta c=3");
    assert_eq!(doc.meta.len(), 2);
    assert!(!doc.meta.contains_key("c"));
    assert_eq!(
        plain_text(match &doc.content[0] {
            Block::Paragraph { content } => &content[0].content,
            other => panic!("expected paragraph, got {other:?}"),
        }),
        "text\n\\meta c=3"
    );
}

#[test]
fn repeated_meta_key_last_write_wins() {
    let doc = parse("\\meta k=first\n\\meta k=second");
    assert_eq!(doc.meta.get("k").map(String::as_str), Some("second"));
}

#[rstest]
fn header_collapse_round_trip(#[values(1, 2, 3, 4, 5, 6)] n: usize) {
    let hashes = "#".repeat(n);
    let doc = parse(&format!("{hashes}> T\nC\n\\{hashes}>"));
    snapshot::invariants(&doc);
    assert_eq!(doc.content.len(), 1);
    match &doc.content[0] {
        Block::Collapse {
            size,
            text: title,
            content,
        } => {
            assert_eq!(*size, Some(n as u8));
            assert_eq!(title, &vec![text("T")]);
            assert_eq!(content, &vec![paragraph("C")]);
        }
        other => panic!("expected collapse, got {other:?}"),
    }
}

#[rstest]
#[case("##> T\nbody\n\\###>")]
#[case("##> T\nbody\n\\|>")]
#[case("|> T\nbody")]
fn unclosed_collapse_is_text(#[case] src: &str) {
    let doc = parse(src);
    assert!(doc.content.iter().all(|b| matches!(b, Block::Paragraph { .. })));
}

#[rstest]
#[case(0)]
#[case(2)]
#[case(4)]
#[case(8)]
fn nested_collapse_indentation_is_relative(#[case] outer_indent: usize) {
    let pad = " ".repeat(outer_indent);
    let reference = "#> A\n  ##> B\n    text\n  \\##>\n\\#>";
    let shifted: String = reference
        .lines()
        .map(|l| format!("{pad}{l}\n"))
        .collect();
    assert_eq!(parse(&shifted).content, parse(reference).content);
}

#[test]
fn inner_collapse_baseline_resets() {
    let doc = parse("|> outer\n      |> inner\n        deep\n      \\|>\n\\|>");
    let Block::Collapse { content, .. } = &doc.content[0] else {
        panic!("expected collapse");
    };
    let Block::Collapse { content: inner, .. } = &content[0] else {
        panic!("expected inner collapse");
    };
    assert_eq!(inner, &vec![paragraph("deep")]);
}

#[rstest]
fn list_item_count(#[values(1, 2, 3, 5)] k: usize, #[values(true, false)] ordered: bool) {
    let src: String = (1..=k)
        .map(|i| {
            if ordered {
                format!("{i}. item {i}\n")
            } else {
                format!("- item {i}\n")
            }
        })
        .collect();
    let doc = parse(&src);
    assert_eq!(doc.content.len(), 1);
    match &doc.content[0] {
        Block::List(list) => {
            assert_eq!(list.ordered, ordered);
            assert_eq!(list.items.len(), k);
        }
        other => panic!("expected list, got {other:?}"),
    }
}

#[test]
fn mixed_lists_separate() {
    let doc = parse("1. a\n2. b\n\n- c\n- d");
    let shape: Vec<_> = doc
        .content
        .iter()
        .map(|b| match b {
            Block::List(l) => (l.ordered, l.items.len()),
            other => panic!("expected list, got {other:?}"),
        })
        .collect();
    assert_eq!(shape, vec![(true, 2), (false, 2)]);
}

#[test]
fn marker_change_without_blank_also_separates() {
    let doc = parse("- a\n1. b");
    assert_eq!(doc.content.len(), 2);
}

#[rstest]
#[case("-")]
#[case("1.")]
#[case("+")]
fn bare_marker_is_text(#[case] src: &str) {
    assert_eq!(parse(src).content, vec![paragraph(src)]);
}

#[test]
fn bullet_glyphs_are_kept_per_item() {
    let doc = parse("- a\n* b\n+ c");
    let Block::List(list) = &doc.content[0] else {
        panic!("expected list");
    };
    let glyphs: Vec<_> = list.items.iter().map(|i| i.marker.clone()).collect();
    assert_eq!(
        glyphs,
        vec![
            ListMarker::Bullet('-'),
            ListMarker::Bullet('*'),
            ListMarker::Bullet('+')
        ]
    );
}

#[rstest]
#[case(r"\*x\*", "*x*")]
#[case(r"\`x\`", "`x`")]
#[case(r"\$x\$", "$x$")]
#[case(r"\_\_x\_\_", "__x__")]
#[case(r"\~\~x\~\~", "~~x~~")]
#[case(r"\# x", "# x")]
#[case(r"\[t](u)", "[t](u)")]
#[case(r"\![a](u)", "![a](u)")]
#[case(r"\|x\|", "|x|")]
#[case(r"|\x|", "|x|")]
#[case(r"\@{k}", "@{k}")]
fn escapes_produce_only_text(#[case] input: &str, #[case] expected: &str) {
    let nodes = parse_inline(input);
    assert!(
        all_inline(&nodes)
            .iter()
            .all(|n| matches!(n, InlineNode::Text { .. })),
        "formatted node in {nodes:?}"
    );
    assert_eq!(plain_text(&nodes), expected);
}

#[rstest]
#[case(r"\- not an item", "- not an item")]
#[case(r"\* not an item", "* not an item")]
#[case(r"\+ not an item", "+ not an item")]
#[case(r"1\. not an item", "1. not an item")]
#[case(r"\# not a title", "# not a title")]
fn escaped_leading_markers_stay_paragraphs(#[case] src: &str, #[case] expected: &str) {
    let doc = parse(src);
    match doc.content.as_slice() {
        [Block::Paragraph { content }] => {
            assert_eq!(content.len(), 1);
            assert_eq!(plain_text(&content[0].content), expected);
        }
        other => panic!("expected one paragraph, got {other:?}"),
    }
}

#[rstest]
#[case("#> Title\nbody with escaped \\#> marker\n\\#>", "body with escaped #> marker")]
#[case("|> Title\nbody with \\|> marker\n\\|>", "body with \\|> marker")]
fn escaped_collapse_markers_inside_body(#[case] src: &str, #[case] expected: &str) {
    let doc = parse(src);
    let [Block::Collapse { content, .. }] = doc.content.as_slice() else {
        panic!("expected one collapse, got {:?}", doc.content);
    };
    match content.as_slice() {
        [Block::Paragraph { content }] => {
            assert_eq!(plain_text(&content[0].content), expected);
        }
        other => panic!("expected one paragraph in the body, got {other:?}"),
    }
}

#[test]
fn code_fence_is_opaque() {
    let doc = parse("```\n**not bold**\n```");
    assert_eq!(
        doc.content,
        vec![Block::Code {
            lang: None,
            content: "**not bold**".into(),
            indent_level: None,
        }]
    );
}

#[test]
fn fence_hides_collapse_delimiters() {
    let doc = parse("#> T\n```\n\\#>\n```\n\\#>\nafter");
    assert_eq!(doc.content.len(), 2);
    assert!(matches!(doc.content[0], Block::Collapse { .. }));
    assert_eq!(doc.content[1], paragraph("after"));
}

#[test]
fn unterminated_fence_is_text() {
    let doc = parse("```rust\nlet x;");
    assert!(matches!(doc.content[0], Block::Paragraph { .. }));
}

#[test]
fn table_needs_separator() {
    let doc = parse("| a | b |\n| c | d |");
    assert!(!doc.content.iter().any(|b| matches!(b, Block::Table { .. })));
    let Block::Paragraph { content } = &doc.content[0] else {
        panic!("expected paragraph");
    };
    let runs: Vec<_> = content.iter().map(|r| plain_text(&r.content)).collect();
    assert_eq!(runs, vec!["| a | b |", "| c | d |"]);
}

#[test]
fn list_item_with_nested_paragraph() {
    let doc = parse("1. A\n    \n    nested para\n2. B");
    assert_eq!(doc.content.len(), 1);
    let Block::List(list) = &doc.content[0] else {
        panic!("expected list");
    };
    assert!(list.ordered);
    assert_eq!(list.items.len(), 2);
    assert_eq!(list.items[0].content, vec![text("A")]);
    assert_eq!(list.items[0].content_blocks, vec![paragraph("nested para")]);
    assert_eq!(list.items[1].content, vec![text("B")]);
    assert!(list.items[1].content_blocks.is_empty());
}

#[test]
fn collapse_with_body() {
    let doc = parse("##> T\nbody\n\\##>");
    assert_eq!(
        doc.content,
        vec![Block::Collapse {
            size: Some(2),
            text: vec![text("T")],
            content: vec![paragraph("body")],
        }]
    );
}

#[test]
fn blank_line_splits_paragraphs_in_collapse_content() {
    let doc = parse("|> T\none\n\ntwo\n\\|>");
    let Block::Collapse { content, .. } = &doc.content[0] else {
        panic!("expected collapse");
    };
    assert_eq!(content, &vec![paragraph("one"), paragraph("two")]);
}

#[test]
fn fragments_do_not_extract_meta() {
    let blocks = parse_fragment("\\meta k=v");
    assert_eq!(blocks, vec![paragraph("\\meta k=v")]);
}

#[test]
fn headings_and_rules() {
    let doc = parse("# One\n###### Six\n####### Seven\n---");
    snapshot::invariants(&doc);
    assert!(matches!(doc.content[0], Block::Title { size: 1, .. }));
    assert!(matches!(doc.content[1], Block::Title { size: 6, .. }));
    assert!(matches!(doc.content[2], Block::Paragraph { .. }));
    assert_eq!(doc.content[3], Block::Hr);
}

#[test]
fn styled_spans_nest() {
    let nodes = parse_inline("__under **bold**__");
    assert_eq!(
        nodes,
        vec![InlineNode::styled(
            Style::Underline,
            vec![
                text("under "),
                InlineNode::styled(Style::Bold, vec![text("bold")])
            ]
        )]
    );
}
