const PREVIEW_STYLE: &str = "display: none; font-size: 0; max-height: 0; overflow: hidden;";

pub struct EmailPreview;

impl EmailPreview {
    /// Places the hidden inbox preview right after the opening `<body ...>` tag.
    pub fn insert_preview_into_html(html: &str, preview: &str) -> String {
        let preview_div = format!(
            "<div class=\"preview\" style=\"{}\">{}</div>",
            PREVIEW_STYLE,
            html_escape::encode_text(preview)
        );
        match Self::body_content_start(html) {
            Some(at) => format!("{}{}{}", &html[..at], preview_div, &html[at..]),
            None => format!("{}{}", preview_div, html),
        }
    }

    fn body_content_start(html: &str) -> Option<usize> {
        let body_open = "<body";
        let body_start = html.find(body_open)?;
        let rest = &html[body_start + body_open.len()..];
        rest.find('>')
            .map(|offset| body_start + body_open.len() + offset + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::EmailPreview;

    fn hidden(text: &str) -> String {
        format!(
            "<div class=\"preview\" style=\"display: none; font-size: 0; max-height: 0; overflow: hidden;\">{}</div>",
            text
        )
    }

    #[test]
    fn test_insert_preview_with_body() {
        let html = "<html><body><p>Hello World</p></body></html>";
        let result = EmailPreview::insert_preview_into_html(html, "Your account is ready");
        assert_eq!(
            result,
            format!(
                "<html><body>{}<p>Hello World</p></body></html>",
                hidden("Your account is ready")
            )
        );
    }

    #[test]
    fn test_insert_preview_with_body_attributes() {
        let html = "<html><body style=\"margin:0;\"><p>Content</p></body></html>";
        let result = EmailPreview::insert_preview_into_html(html, "Preview");
        assert_eq!(
            result,
            format!(
                "<html><body style=\"margin:0;\">{}<p>Content</p></body></html>",
                hidden("Preview")
            )
        );
    }

    #[test]
    fn test_insert_preview_without_body() {
        let result = EmailPreview::insert_preview_into_html("<p>Simple</p>", "No body");
        assert_eq!(result, format!("{}<p>Simple</p>", hidden("No body")));
    }

    #[test]
    fn test_preview_is_escaped() {
        let html = "<body></body>";
        let result = EmailPreview::insert_preview_into_html(html, "<b>bold</b> & \"quotes\"");
        assert_eq!(
            result,
            format!(
                "<body>{}</body>",
                hidden("&lt;b&gt;bold&lt;/b&gt; &amp; \"quotes\"")
            )
        );
    }
}
