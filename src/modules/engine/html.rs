use crate::modules::engine::{
    TemplateEngine, BODY_LIST, BODY_TEXT, BUTTON, BUTTON_GROUP, FOOTER, HEADER, HEADING, LAYOUT,
};
use crate::modules::error::TemplateResult;
use crate::modules::template::block::{split_line_breaks, Block, Button};
use crate::modules::template::href::sanitize_href;
use crate::modules::template::preview::EmailPreview;
use serde_json::{json, Value};
use tracing::trace;

impl TemplateEngine {
    /// Renders the blocks into a complete HTML document. Every value goes
    /// through the handlebars HTML escaper; only the layout inlines the
    /// already rendered fragments.
    pub fn render_html(
        &self,
        subject: &str,
        preview: Option<&str>,
        blocks: &[Block],
    ) -> TemplateResult<String> {
        let mut content = String::new();
        let mut list_items: Vec<Value> = Vec::new();

        for block in blocks {
            if let Block::ListItem {
                text,
                meta_info,
                icon_url,
                ..
            } = block
            {
                list_items.push(json!({
                    "text": text,
                    "meta_info": meta_info,
                    "icon_url": icon_url.as_deref().map(sanitize_href),
                }));
                continue;
            }
            self.flush_list(&mut list_items, &mut content)?;
            content.push_str(&self.render_block(block)?);
        }
        self.flush_list(&mut list_items, &mut content)?;

        let html = self.handlebars.render(
            LAYOUT,
            &json!({
                "subject": subject,
                "content": content,
            }),
        )?;

        Ok(match preview {
            Some(preview) => EmailPreview::insert_preview_into_html(&html, preview),
            None => html,
        })
    }

    fn flush_list(&self, items: &mut Vec<Value>, content: &mut String) -> TemplateResult<()> {
        if items.is_empty() {
            return Ok(());
        }
        let rendered = self
            .handlebars
            .render(BODY_LIST, &json!({ "items": std::mem::take(items) }))?;
        trace!("Rendered 'list_item' run into one list");
        content.push_str(&rendered);
        Ok(())
    }

    fn render_block(&self, block: &Block) -> TemplateResult<String> {
        trace!("Rendering '{}' block", block.kind());
        let defaults = self.defaults();
        let rendered = match block {
            Block::Header => self.handlebars.render(
                HEADER,
                &json!({
                    "name": defaults.name(),
                    "color": defaults.color(),
                    "logo_url": defaults.logo_url().map(sanitize_href),
                }),
            )?,
            Block::Heading { title, .. } => {
                self.handlebars.render(HEADING, &json!({ "title": title }))?
            }
            Block::BodyText { text, .. } => {
                self.handlebars.render(BODY_TEXT, &json!({ "text": text }))?
            }
            Block::Button(button) => self.handlebars.render(
                BUTTON,
                &json!({
                    "button": button_data(button),
                    "color": defaults.color(),
                }),
            )?,
            Block::ButtonGroup { left, right } => self.handlebars.render(
                BUTTON_GROUP,
                &json!({
                    "left": button_data(left),
                    "right": button_data(right),
                    "color": defaults.color(),
                }),
            )?,
            Block::Footer { text } => {
                let footer = match text {
                    Some(text) => text.clone(),
                    None => defaults.default_footer(),
                };
                let lines: Vec<Value> = split_line_breaks(&footer)
                    .into_iter()
                    .enumerate()
                    .map(|(i, line)| json!({ "text": line, "break_before": i > 0 }))
                    .collect();
                self.handlebars.render(FOOTER, &json!({ "lines": lines }))?
            }
            Block::ListItem { .. } => String::new(),
        };
        Ok(rendered)
    }
}

fn button_data(button: &Button) -> Value {
    json!({
        "text": button.text,
        "href": sanitize_href(&button.url),
    })
}
