use ferroblock::{ListKind, NodeId, NodeKind, Tree, parse};

fn outline(input: &str) -> String {
    parse(input).unwrap().outline()
}

fn first_list(tree: &Tree) -> NodeId {
    tree.ids()
        .find(|&id| matches!(tree[id].kind, NodeKind::List(_)))
        .expect("document has a list")
}

fn items(tree: &Tree) -> Vec<NodeId> {
    tree.ids()
        .filter(|&id| matches!(tree[id].kind, NodeKind::ListItem(_)))
        .collect()
}

// --- Marker arithmetic ---

#[test]
fn bullet_with_one_space_requires_indent_two() {
    let tree = parse("- item\n").unwrap();
    let item = tree[items(&tree)[0]].as_list_item().unwrap().clone();
    assert_eq!(item.marker, "-");
    assert_eq!(item.start_indent_spaces, 0);
    assert_eq!(item.indent_spaces, 2);
}

#[test]
fn wide_gap_clamps_to_one_column() {
    let tree = parse("-     code\n").unwrap();
    let item = items(&tree)[0];
    assert_eq!(tree[item].as_list_item().unwrap().indent_spaces, 2);
    // The surplus indentation makes the content an indented code block.
    assert_eq!(
        tree.outline(),
        "Document\n  List tight=true\n    ListItem \"-\" tight=true\n      CodeBlock \"code\\n\"\n"
    );
}

#[test]
fn ordered_marker_width_counts_digits_and_delimiter() {
    let tree = parse("12. twelve\n").unwrap();
    let item = tree[items(&tree)[0]].as_list_item().unwrap().clone();
    assert_eq!(item.marker, "12.");
    assert_eq!(item.indent_spaces, 4);
    assert_eq!(item.start(), 12);
    assert_eq!(item.delimiter(), b'.');
}

#[test]
fn indented_marker_adds_start_indent() {
    let tree = parse("  * x\n").unwrap();
    let item = tree[items(&tree)[0]].as_list_item().unwrap().clone();
    assert_eq!(item.start_indent_spaces, 2);
    assert_eq!(item.indent_spaces, 4);
}

// --- Tightness ---

#[test]
fn simple_list_is_tight() {
    assert_eq!(
        outline("- a\n- b\n"),
        "Document\n  List tight=true\n    ListItem \"-\" tight=true\n      Paragraph \"a\"\n    ListItem \"-\" tight=true\n      Paragraph \"b\"\n"
    );
}

#[test]
fn interior_blank_line_makes_item_loose() {
    assert_eq!(
        outline("- a\n\n  b\n"),
        "Document\n  List tight=false\n    ListItem \"-\" tight=false\n      Paragraph \"a\"\n      Paragraph \"b\"\n"
    );
}

#[test]
fn trailing_blank_lines_keep_item_tight() {
    assert_eq!(
        outline("- a\n  b\n\n\n"),
        "Document\n  List tight=true\n    ListItem \"-\" tight=true\n      Paragraph \"a\\nb\"\n"
    );
}

#[test]
fn two_blank_runs_make_item_loose() {
    let tree = parse("- a\n\n  b\n\n  c\n").unwrap();
    let item = items(&tree)[0];
    assert!(!tree[item].as_list_item().unwrap().tight);
    assert_eq!(tree.children(item).len(), 3);
}

#[test]
fn blank_between_items_keeps_items_tight() {
    // Blank lines that only separate sibling items belong to neither item's
    // interior.
    let tree = parse("- a\n\n- b\n").unwrap();
    let list = first_list(&tree);
    assert_eq!(tree.children(list).len(), 2);
    assert!(items(&tree).iter().all(|&i| tree[i].as_list_item().unwrap().tight));
    assert!(tree[list].as_list().unwrap().tight);
}

#[test]
fn list_tightness_is_conjunction_of_items() {
    let tree = parse("- a\n- b\n\n  c\n- d\n").unwrap();
    let tight: Vec<bool> = items(&tree)
        .iter()
        .map(|&i| tree[i].as_list_item().unwrap().tight)
        .collect();
    assert_eq!(tight, vec![true, false, true]);
    assert!(!tree[first_list(&tree)].as_list().unwrap().tight);
}

// --- Degenerate markers ---

#[test]
fn blank_marker_line_is_empty_tight_item() {
    let tree = parse("-\n").unwrap();
    let all = items(&tree);
    assert_eq!(all.len(), 1);
    assert!(tree.children(all[0]).is_empty());
    assert!(tree[all[0]].as_list_item().unwrap().tight);
}

#[test]
fn blank_marker_line_followed_by_blank_is_loose() {
    assert_eq!(
        outline("-\n\n- b\n"),
        "Document\n  List tight=false\n    ListItem \"-\" tight=false\n    ListItem \"-\" tight=true\n      Paragraph \"b\"\n"
    );
}

#[test]
fn blank_marker_line_followed_by_marker() {
    assert_eq!(
        outline("-\n- b\n"),
        "Document\n  List tight=true\n    ListItem \"-\" tight=true\n    ListItem \"-\" tight=true\n      Paragraph \"b\"\n"
    );
}

#[test]
fn blank_marker_line_followed_by_content() {
    assert_eq!(
        outline("-\n  foo\n"),
        "Document\n  List tight=true\n    ListItem \"-\" tight=true\n      Paragraph \"foo\"\n"
    );
}

#[test]
fn unindented_line_after_blank_marker_line_ends_list() {
    assert_eq!(
        outline("-\nfoo\n"),
        "Document\n  List tight=true\n    ListItem \"-\" tight=true\n  Paragraph \"foo\"\n"
    );
}

#[test]
fn different_marker_after_blank_marker_line_starts_new_list() {
    assert_eq!(
        outline("-\n1. b\n"),
        "Document\n  List tight=true\n    ListItem \"-\" tight=true\n  List tight=true\n    ListItem \"1.\" tight=true\n      Paragraph \"b\"\n"
    );
}

// --- List boundaries ---

#[test]
fn different_bullet_starts_new_list() {
    let tree = parse("- a\n* b\n").unwrap();
    let root = tree.root();
    assert_eq!(tree.children(root).len(), 2);
    let kinds: Vec<ListKind> = tree
        .children(root)
        .iter()
        .map(|&id| tree[id].as_list().unwrap().kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            ListKind::Bullet { marker: b'-' },
            ListKind::Bullet { marker: b'*' },
        ]
    );
}

#[test]
fn different_delimiter_starts_new_list() {
    let tree = parse("1. a\n3) b\n").unwrap();
    assert_eq!(tree.children(tree.root()).len(), 2);
}

#[test]
fn ordered_items_keep_first_start() {
    let tree = parse("3. a\n4. b\n").unwrap();
    let list = first_list(&tree);
    assert_eq!(
        tree[list].as_list().unwrap().kind,
        ListKind::Ordered {
            start: 3,
            delimiter: b'.',
        }
    );
    assert_eq!(tree.children(list).len(), 2);
}

#[test]
fn thematic_break_ends_list() {
    assert_eq!(
        outline("* a\n* * *\n"),
        "Document\n  List tight=true\n    ListItem \"*\" tight=true\n      Paragraph \"a\"\n  ThematicBreak\n"
    );
}

#[test]
fn nested_list() {
    assert_eq!(
        outline("- a\n  - b\n- c\n"),
        "Document\n  List tight=true\n    ListItem \"-\" tight=true\n      Paragraph \"a\"\n      List tight=true\n        ListItem \"-\" tight=true\n          Paragraph \"b\"\n    ListItem \"-\" tight=true\n      Paragraph \"c\"\n"
    );
}

#[test]
fn outer_item_indentation_applies_after_nested_item_closes() {
    assert_eq!(
        outline("- a\n  - b\n\n  c\n"),
        "Document\n  List tight=true\n    ListItem \"-\" tight=true\n      Paragraph \"a\"\n      List tight=true\n        ListItem \"-\" tight=true\n          Paragraph \"b\"\n      Paragraph \"c\"\n"
    );
}

// --- Paragraph interaction ---

#[test]
fn list_marker_interrupts_paragraph() {
    assert_eq!(
        outline("text\n- item"),
        "Document\n  Paragraph \"text\"\n  List tight=true\n    ListItem \"-\" tight=true\n      Paragraph \"item\"\n"
    );
}

#[test]
fn ordered_marker_not_starting_at_one_does_not_interrupt() {
    assert_eq!(outline("text\n2. two\n"), "Document\n  Paragraph \"text\\n2. two\"\n");
}

#[test]
fn empty_marker_does_not_interrupt() {
    assert_eq!(outline("text\n-\n"), "Document\n  Paragraph \"text\\n-\"\n");
}

#[test]
fn lazy_continuation_in_item() {
    assert_eq!(
        outline("- a\nb\n"),
        "Document\n  List tight=true\n    ListItem \"-\" tight=true\n      Paragraph \"a\\nb\"\n"
    );
}
