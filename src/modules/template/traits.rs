use crate::modules::error::TemplateResult;

/// Builds an HTML email and its plain text alternative from semantic blocks.
///
/// Blocks render in call order in both formats. Rendering never mutates the
/// template, so either format may be rendered any number of times and adds
/// may continue afterwards. Instances are meant for a single owner; share
/// them across threads only behind external synchronization.
///
/// ```
/// use std::sync::Arc;
/// use mailtemplate::modules::branding::Branding;
/// use mailtemplate::modules::engine::TemplateEngine;
/// use mailtemplate::modules::template::traits::MailTemplate;
///
/// let engine = Arc::new(TemplateEngine::new(Arc::new(Branding::default())).unwrap());
/// let mut template = engine.create_template("settings.Welcome");
/// template.add_header();
/// template.add_heading("Welcome aboard");
/// template.add_body_text("You have now an account, you can add, protect, and share your data.");
/// template.add_body_button_group(
///     "Set your password", "https://example.org/resetPassword/q1234567890qwertz",
///     "Install Client", "https://example.org/install",
/// );
/// template.add_footer("Optional footer text");
///
/// let html = template.render_html().unwrap();
/// let text = template.render_text();
/// assert!(html.contains("Welcome aboard"));
/// assert!(text.contains("Install Client: https://example.org/install"));
/// ```
pub trait MailTemplate {
    /// Adds the branded header. Calling it twice adds two headers; how that
    /// looks is left undefined.
    fn add_header(&mut self);

    fn add_heading(&mut self, title: &str);

    /// Adds a paragraph of plain text. It is escaped for HTML and used as is
    /// in the plain text output.
    fn add_body_text(&mut self, text: &str);

    /// Adds two side by side buttons, left then right.
    fn add_body_button_group(
        &mut self,
        left_text: &str,
        left_url: &str,
        right_text: &str,
        right_url: &str,
    );

    fn add_body_button(&mut self, text: &str, url: &str);

    /// Adds the footer. An empty `text` selects the branding default
    /// `Name - Slogan<br>notice`. `<br>` markers become line breaks in both
    /// formats.
    fn add_footer(&mut self, text: &str);

    fn render_html(&self) -> TemplateResult<String>;

    fn render_text(&self) -> String;
}
