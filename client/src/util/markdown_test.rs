use super::*;

#[test]
fn renders_emphasis_and_lists() {
    let html = render_markdown("**bold** and *soft*\n\n- one\n- two\n");
    assert!(html.contains("<strong>bold</strong>"));
    assert!(html.contains("<em>soft</em>"));
    assert!(html.contains("<li>one</li>"));
    assert!(html.contains("<li>two</li>"));
}

#[test]
fn escapes_inline_html() {
    let html = render_markdown("hello <script>alert(1)</script>");
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn empty_source_renders_empty() {
    assert_eq!(render_markdown(""), "");
}
