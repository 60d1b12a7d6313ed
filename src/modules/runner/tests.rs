use crate::modules::document::TemplateDocument;
use crate::modules::error::code::ErrorCode;
use crate::modules::runner::{render_document, run};
use crate::modules::settings::cli::{OutputFormat, Settings};
use clap::Parser;
use std::io::Write;

const DOCUMENT: &str = r#"{
    "subject": "Password reset",
    "blocks": [
        { "kind": "header" },
        { "kind": "heading", "title": "Reset your password" },
        { "kind": "button", "text": "Reset", "url": "https://cloud.example.com/reset/abc" },
        { "kind": "footer", "text": "Sent by Acme<br>Do not reply" }
    ]
}"#;

fn parse_settings(args: &[&str]) -> Settings {
    let mut argv = vec!["mailtemplate"];
    argv.extend_from_slice(args);
    Settings::parse_from(argv)
}

#[test]
fn test_run_reads_document_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(DOCUMENT.as_bytes()).unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let settings = parse_settings(&[
        "--mailtemplate-input",
        &path,
        "--mailtemplate-output",
        "text",
    ]);
    let output = String::from_utf8(run(&settings).unwrap()).unwrap();
    assert_eq!(
        output,
        "Reset your password\n\nReset: https://cloud.example.com/reset/abc\n\n--\nSent by Acme\nDo not reply\n"
    );
}

#[test]
fn test_missing_input_file() {
    let settings = parse_settings(&["--mailtemplate-input", "/nonexistent/mailtemplate.json"]);
    let err = run(&settings).unwrap_err();
    assert_eq!(err.code(), ErrorCode::IoError);
}

#[test]
fn test_html_and_subject_output() {
    let document = TemplateDocument::from_json(DOCUMENT).unwrap();

    let mut settings = parse_settings(&["--mailtemplate-brand-name", "Acme"]);
    assert_eq!(settings.mailtemplate_output, OutputFormat::Html);
    let html = String::from_utf8(render_document(&settings, &document).unwrap()).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("href=\"https://cloud.example.com/reset/abc\""));
    assert!(html.contains("Acme"));

    settings.mailtemplate_output = OutputFormat::Subject;
    let subject = render_document(&settings, &document).unwrap();
    assert_eq!(subject, b"Password reset");
}

#[test]
fn test_mime_output_requires_addresses() {
    let document = TemplateDocument::from_json(DOCUMENT).unwrap();
    let settings = parse_settings(&["--mailtemplate-output", "mime"]);
    let err = render_document(&settings, &document).unwrap_err();
    assert_eq!(err.code(), ErrorCode::MissingConfiguration);

    let settings = parse_settings(&[
        "--mailtemplate-output",
        "mime",
        "--mailtemplate-mime-from",
        "noreply@example.com",
        "--mailtemplate-mime-to",
        "bob@example.com",
    ]);
    let message = String::from_utf8(render_document(&settings, &document).unwrap()).unwrap();
    assert!(message.contains("Subject: Password reset"));
    assert!(message.contains("multipart/alternative"));
}
