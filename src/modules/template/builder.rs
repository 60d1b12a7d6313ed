// Copyright © 2025 rustmailer.com
// Licensed under RustMailer License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use crate::modules::compose::RenderedEmail;
use crate::modules::engine::TemplateEngine;
use crate::modules::error::TemplateResult;
use crate::modules::template::block::{Block, Button};
use crate::modules::template::text::render_text;
use crate::modules::template::traits::MailTemplate;
use std::sync::Arc;
use tracing::debug;

pub struct EmailTemplate {
    email_id: String,
    subject: String,
    preview: Option<String>,
    blocks: Vec<Block>,
    engine: Arc<TemplateEngine>,
}

impl EmailTemplate {
    pub fn new(engine: Arc<TemplateEngine>, email_id: impl Into<String>) -> Self {
        Self {
            email_id: email_id.into(),
            subject: String::new(),
            preview: None,
            blocks: Vec::new(),
            engine,
        }
    }

    pub fn email_id(&self) -> &str {
        &self.email_id
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn set_subject(&mut self, subject: &str) {
        self.subject = subject.to_string();
    }

    pub fn render_subject(&self) -> String {
        self.subject.clone()
    }

    /// Hidden inbox preview text, HTML only. An empty string clears it.
    pub fn set_preview(&mut self, preview: &str) {
        self.preview = Some(preview.to_string()).filter(|p| !p.is_empty());
    }

    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn add_heading_with_plain_text(&mut self, title: &str, plain_title: &str) {
        self.add_block(Block::Heading {
            title: title.to_string(),
            plain_title: Some(plain_title.to_string()),
        });
    }

    pub fn add_body_text_with_plain_text(&mut self, text: &str, plain_text: &str) {
        self.add_block(Block::BodyText {
            text: text.to_string(),
            plain_text: Some(plain_text.to_string()),
        });
    }

    /// Adds an item to the body list. Consecutive items share one list.
    /// `icon_url` may be empty for a plain bullet.
    pub fn add_body_list_item(
        &mut self,
        text: &str,
        meta_info: &str,
        icon_url: &str,
        plain_text: &str,
        plain_meta_info: &str,
    ) {
        self.add_block(Block::ListItem {
            text: text.to_string(),
            meta_info: meta_info.to_string(),
            icon_url: Some(icon_url.to_string()).filter(|u| !u.is_empty()),
            plain_text: Some(plain_text.to_string()),
            plain_meta_info: Some(plain_meta_info.to_string()),
        });
    }

    pub fn add_body_button_with_plain_text(&mut self, text: &str, url: &str, plain_text: &str) {
        self.add_block(Block::Button(
            Button::new(text, url).with_plain_text(plain_text),
        ));
    }

    pub fn add_body_button_group_with_plain_text(&mut self, left: Button, right: Button) {
        self.add_block(Block::ButtonGroup { left, right });
    }

    /// Footer built from the branding defaults.
    pub fn add_default_footer(&mut self) {
        self.add_block(Block::Footer { text: None });
    }

    /// Footer with exactly `text`, an empty string giving an empty footer.
    pub fn add_footer_text(&mut self, text: &str) {
        self.add_block(Block::Footer {
            text: Some(text.to_string()),
        });
    }

    pub fn render(&self) -> TemplateResult<RenderedEmail> {
        Ok(RenderedEmail {
            subject: self.render_subject(),
            html: self.render_html()?,
            text: self.render_text(),
        })
    }
}

impl MailTemplate for EmailTemplate {
    fn add_header(&mut self) {
        self.add_block(Block::Header);
    }

    fn add_heading(&mut self, title: &str) {
        self.add_block(Block::heading(title));
    }

    fn add_body_text(&mut self, text: &str) {
        self.add_block(Block::body_text(text));
    }

    fn add_body_button_group(
        &mut self,
        left_text: &str,
        left_url: &str,
        right_text: &str,
        right_url: &str,
    ) {
        self.add_block(Block::ButtonGroup {
            left: Button::new(left_text, left_url),
            right: Button::new(right_text, right_url),
        });
    }

    fn add_body_button(&mut self, text: &str, url: &str) {
        self.add_block(Block::Button(Button::new(text, url)));
    }

    fn add_footer(&mut self, text: &str) {
        if text.is_empty() {
            self.add_default_footer();
        } else {
            self.add_footer_text(text);
        }
    }

    fn render_html(&self) -> TemplateResult<String> {
        let html = self.engine.render_html(
            &self.subject,
            self.preview.as_deref(),
            &self.blocks,
        )?;
        debug!(
            email_id = %self.email_id,
            blocks = self.blocks.len(),
            "rendered html email"
        );
        Ok(html)
    }

    fn render_text(&self) -> String {
        render_text(&self.blocks, self.engine.defaults())
    }
}
