// Copyright © 2025 rustmailer.com
// Licensed under RustMailer License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use crate::modules::branding::Branding;
use crate::modules::document::TemplateDocument;
use crate::modules::engine::TemplateEngine;
use crate::modules::error::code::ErrorCode;
use crate::modules::error::TemplateResult;
use crate::modules::settings::cli::{OutputFormat, Settings};
use crate::modules::template::traits::MailTemplate;
use crate::raise_error;
use std::fs::File;
use std::io::{self, BufReader};
use std::sync::Arc;
use tracing::info;

#[cfg(test)]
mod tests;

/// Loads the configured document (file or stdin) and renders it.
pub fn run(settings: &Settings) -> TemplateResult<Vec<u8>> {
    let document = match &settings.mailtemplate_input {
        Some(path) => {
            info!("Reading template document from {:?}", path);
            TemplateDocument::from_reader(BufReader::new(File::open(path)?))?
        }
        None => {
            info!("Reading template document from stdin");
            TemplateDocument::from_reader(io::stdin().lock())?
        }
    };
    render_document(settings, &document)
}

pub fn render_document(settings: &Settings, document: &TemplateDocument) -> TemplateResult<Vec<u8>> {
    let engine = Arc::new(TemplateEngine::new(Arc::new(Branding::from_settings(
        settings,
    )))?);
    let mut template = engine.create_template(document.email_id());
    document.apply(&mut template);

    let output = settings.mailtemplate_output;
    info!(
        "Rendering '{}' ({} blocks) as {}",
        template.email_id(),
        template.blocks().len(),
        output
    );

    match output {
        OutputFormat::Html => Ok(template.render_html()?.into_bytes()),
        OutputFormat::Text => Ok(template.render_text().into_bytes()),
        OutputFormat::Subject => Ok(template.render_subject().into_bytes()),
        OutputFormat::Mime => {
            let (from, to) = match (
                &settings.mailtemplate_mime_from,
                &settings.mailtemplate_mime_to,
            ) {
                (Some(from), Some(to)) => (from, to),
                _ => {
                    return Err(raise_error!(
                        "Both 'mailtemplate_mime_from' and 'mailtemplate_mime_to' are required for mime output."
                            .into(),
                        ErrorCode::MissingConfiguration
                    ))
                }
            };
            template.render()?.to_mime(from, to)
        }
    }
}
