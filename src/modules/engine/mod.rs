// Copyright © 2025 rustmailer.com
// Licensed under RustMailer License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use crate::modules::branding::Defaults;
use crate::modules::error::code::ErrorCode;
use crate::modules::error::TemplateResult;
use crate::modules::template::builder::EmailTemplate;
use crate::raise_error;
use assets::TemplateAssets;
use handlebars::Handlebars;
use std::sync::Arc;
use tracing::debug;

pub mod assets;
pub mod html;

pub const LAYOUT: &str = "layout";
pub const HEADER: &str = "header";
pub const HEADING: &str = "heading";
pub const BODY_TEXT: &str = "body_text";
pub const BODY_LIST: &str = "body_list";
pub const BUTTON: &str = "button";
pub const BUTTON_GROUP: &str = "button_group";
pub const FOOTER: &str = "footer";

const REQUIRED_TEMPLATES: [&str; 8] = [
    LAYOUT,
    HEADER,
    HEADING,
    BODY_TEXT,
    BODY_LIST,
    BUTTON,
    BUTTON_GROUP,
    FOOTER,
];

/// Registered markup fragments plus the branding they are rendered with.
/// Create once and hand out templates with [`TemplateEngine::create_template`].
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
    defaults: Arc<dyn Defaults>,
}

impl TemplateEngine {
    pub fn new(defaults: Arc<dyn Defaults>) -> TemplateResult<Self> {
        let mut handlebars = Handlebars::new();
        // Only `& < > "` are encoded so link targets stay readable in the source.
        handlebars.register_escape_fn(|value| {
            html_escape::encode_double_quoted_attribute(value).into_owned()
        });

        for file in TemplateAssets::iter() {
            let Some(name) = file.strip_suffix(".hbs") else {
                continue;
            };
            let content = TemplateAssets::content(&file)?;
            handlebars
                .register_template_string(name, content)
                .map_err(|e| {
                    raise_error!(
                        format!("Handlebars register '{name}' error: {e}"),
                        ErrorCode::InternalError
                    )
                })?;
            debug!("Registered email fragment '{}'", name);
        }

        if let Some(missing) = REQUIRED_TEMPLATES
            .iter()
            .find(|name| !handlebars.has_template(name))
        {
            return Err(raise_error!(
                format!("Email fragment '{missing}' is not embedded"),
                ErrorCode::MissingConfiguration
            ));
        }

        Ok(Self {
            handlebars,
            defaults,
        })
    }

    pub fn defaults(&self) -> &dyn Defaults {
        self.defaults.as_ref()
    }

    pub fn create_template(self: &Arc<Self>, email_id: &str) -> EmailTemplate {
        EmailTemplate::new(Arc::clone(self), email_id)
    }
}
