use crate::modules::branding::Branding;
use crate::modules::engine::TemplateEngine;
use crate::modules::template::block::{Block, Button};
use crate::modules::template::builder::EmailTemplate;
use crate::modules::template::traits::MailTemplate;
use std::sync::Arc;

fn new_template() -> EmailTemplate {
    let branding = Branding::new("Nextcloud", "a safe home for all your data");
    let engine = Arc::new(TemplateEngine::new(Arc::new(branding)).unwrap());
    engine.create_template("test.Template")
}

fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("'{needle}' not found in:\n{haystack}"))
}

#[test]
fn test_blocks_render_in_call_order() {
    let mut template = new_template();
    template.add_header();
    template.add_body_text("first paragraph");
    template.add_heading("a late heading");
    template.add_body_button("the button", "https://example.com/button");
    template.add_body_text("last paragraph");

    let html = template.render_html().unwrap();
    let text = template.render_text();
    for output in [&html, &text] {
        let first = position(output, "first paragraph");
        let heading = position(output, "a late heading");
        let button = position(output, "the button");
        let last = position(output, "last paragraph");
        assert!(first < heading && heading < button && button < last);
    }
}

#[test]
fn test_rendering_is_repeatable() {
    let mut template = new_template();
    template.add_header();
    template.add_heading("Welcome");
    template.add_body_button_group("A", "https://a.example", "B", "https://b.example");
    template.add_footer("");

    let blocks_before = template.blocks().to_vec();
    let html = template.render_html().unwrap();
    let text = template.render_text();
    assert_eq!(template.render_html().unwrap(), html);
    assert_eq!(template.render_text(), text);
    assert_eq!(template.blocks(), blocks_before.as_slice());
}

#[test]
fn test_add_after_render() {
    let mut template = new_template();
    template.add_body_text("one");
    let before = template.render_text();
    template.add_body_text("two");
    assert_eq!(before, "one\n\n");
    assert_eq!(template.render_text(), "one\n\ntwo\n\n");
}

#[test]
fn test_default_footer_in_both_formats() {
    let mut template = new_template();
    template.add_footer("");

    let html = template.render_html().unwrap();
    assert!(html.contains("Nextcloud - a safe home for all your data"));
    assert_eq!(
        template.render_text(),
        "--\nNextcloud - a safe home for all your data\nThis is an automatically sent email, please do not reply.\n"
    );
}

#[test]
fn test_custom_footer_line_breaks() {
    let mut template = new_template();
    template.add_footer("Custom<br>Line2");

    assert!(template.render_text().contains("Custom\nLine2"));
    assert!(template.render_html().unwrap().contains("Custom<br>Line2"));
}

#[test]
fn test_explicit_empty_footer_differs_from_default() {
    let mut template = new_template();
    template.add_footer_text("");
    assert_eq!(template.blocks(), &[Block::Footer { text: Some(String::new()) }]);
    assert!(!template.render_html().unwrap().contains("Nextcloud"));

    let mut template = new_template();
    template.add_default_footer();
    template.add_footer("");
    assert_eq!(
        template.blocks(),
        &[Block::Footer { text: None }, Block::Footer { text: None }]
    );
}

#[test]
fn test_body_text_is_escaped_only_in_html() {
    let mut template = new_template();
    template.add_body_text("<script>alert('x')</script> & more");

    let html = template.render_html().unwrap();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));

    let text = template.render_text();
    assert_eq!(text, "<script>alert('x')</script> & more\n\n");
}

#[test]
fn test_heading_and_button_labels_are_escaped() {
    let mut template = new_template();
    template.add_heading("<img src=x onerror=alert(1)>");
    template.add_body_button("<b>Go</b>", "https://example.com");

    let html = template.render_html().unwrap();
    assert!(!html.contains("<img src=x"));
    assert!(!html.contains("<b>Go</b>"));
}

#[test]
fn test_button_group() {
    let mut template = new_template();
    template.add_body_button_group(
        "Set password",
        "https://a.example/x",
        "Install",
        "https://b.example/y",
    );

    let html = template.render_html().unwrap();
    assert!(html.contains("href=\"https://a.example/x\""));
    assert!(html.contains("href=\"https://b.example/y\""));
    assert!(html.contains(">Set password</a>"));
    assert!(html.contains(">Install</a>"));
    assert!(position(&html, "https://a.example/x") < position(&html, "https://b.example/y"));

    assert_eq!(
        template.render_text(),
        "Set password: https://a.example/x\nInstall: https://b.example/y\n\n"
    );
}

#[test]
fn test_empty_template() {
    let template = new_template();
    let html = template.render_html().unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("</body>"));
    assert_eq!(template.render_text(), "");
    assert_eq!(template.render_subject(), "");
}

#[test]
fn test_repeated_header_is_kept() {
    let mut template = new_template();
    template.add_header();
    template.add_header();
    assert_eq!(template.blocks(), &[Block::Header, Block::Header]);
    let html = template.render_html().unwrap();
    assert_eq!(html.matches("class=\"header\"").count(), 2);
}

#[test]
fn test_malformed_urls_pass_through() {
    let mut template = new_template();
    template.add_body_button("Odd", "ht!tp:/broken url");
    assert_eq!(template.render_text(), "Odd: ht!tp:/broken url\n\n");
    assert!(template.render_html().unwrap().contains("ht!tp:/broken url"));
}

#[test]
fn test_plain_text_variants() {
    let mut template = new_template();
    template.add_heading_with_plain_text("Hello <b>you</b>", "Hello you");
    template.add_body_text_with_plain_text("Rich", "");
    template.add_body_list_item("Item", "meta", "", "Plain item", "");
    template.add_body_button_with_plain_text("Open", "https://o.example", "Open now");
    template.add_body_button_group_with_plain_text(
        Button::new("L", "https://l.example").with_plain_text("Left"),
        Button::new("R", "https://r.example"),
    );

    assert_eq!(
        template.render_text(),
        "Hello you\n\n\
         Rich\n\n\
         \x20 * Plain item\n    meta\n\n\
         Open now: https://o.example\n\n\
         Left: https://l.example\nR: https://r.example\n\n"
    );
    let html = template.render_html().unwrap();
    assert!(html.contains(">L</a>"));
    assert!(html.contains("Hello &lt;b&gt;you&lt;/b&gt;"));
}

#[test]
fn test_render_collects_all_parts() {
    let mut template = new_template();
    template.set_subject("Welcome");
    template.set_preview("Get started");
    template.add_heading("Hi");

    let rendered = template.render().unwrap();
    assert_eq!(rendered.subject, "Welcome");
    assert!(rendered.html.contains("Get started"));
    assert_eq!(rendered.text, "Hi\n\n");
    assert_eq!(template.email_id(), "test.Template");
}
