use super::*;

#[test]
fn renders_headings_and_lists() {
    let html = render_markdown_html("## Requirements\n\n- Rust\n- SQL\n");
    assert!(html.contains("<h2>Requirements</h2>"));
    assert!(html.contains("<li>Rust</li>"));
}

#[test]
fn escapes_raw_html() {
    let html = render_markdown_html("<script>alert(1)</script>");
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn empty_description_renders_nothing() {
    assert_eq!(render_markdown_html(""), "");
}
