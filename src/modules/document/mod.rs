use crate::modules::error::TemplateResult;
use crate::modules::template::block::Block;
use crate::modules::template::builder::EmailTemplate;
use serde::{Deserialize, Serialize};
use std::io::Read;
use tracing::debug;

pub const DEFAULT_EMAIL_ID: &str = "mailtemplate.Document";

/// JSON description of an email, replayed onto a template in block order.
///
/// ```json
/// {
///   "email_id": "settings.Welcome",
///   "subject": "Welcome aboard",
///   "blocks": [
///     { "kind": "header" },
///     { "kind": "heading", "title": "Welcome aboard" },
///     { "kind": "button", "text": "Log in", "url": "https://cloud.example.com" },
///     { "kind": "footer" }
///   ]
/// }
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
pub struct TemplateDocument {
    #[serde(default)]
    pub email_id: Option<String>,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub preview: Option<String>,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl TemplateDocument {
    pub fn from_json(json: &str) -> TemplateResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> TemplateResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn email_id(&self) -> &str {
        self.email_id.as_deref().unwrap_or(DEFAULT_EMAIL_ID)
    }

    pub fn apply(&self, template: &mut EmailTemplate) {
        template.set_subject(&self.subject);
        if let Some(preview) = &self.preview {
            template.set_preview(preview);
        }
        for block in &self.blocks {
            template.add_block(block.clone());
        }
        debug!(
            email_id = %template.email_id(),
            blocks = self.blocks.len(),
            "applied template document"
        );
    }
}
