// Copyright © 2025 rustmailer.com
// Licensed under RustMailer License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use crate::raise_error;
use code::ErrorCode;
use snafu::{Location, Snafu};

pub mod code;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum TemplateError {
    #[snafu(display("{message}"))]
    Generic {
        message: String,
        #[snafu(implicit)]
        location: Location,
        code: ErrorCode,
    },
}

pub type TemplateResult<T, E = TemplateError> = std::result::Result<T, E>;

impl TemplateError {
    pub fn code(&self) -> ErrorCode {
        match self {
            TemplateError::Generic { code, .. } => *code,
        }
    }
}

impl From<handlebars::RenderError> for TemplateError {
    fn from(e: handlebars::RenderError) -> Self {
        raise_error!(
            format!("Handlebars render error: {e}"),
            ErrorCode::TemplateRenderFailed
        )
    }
}

impl From<serde_json::Error> for TemplateError {
    fn from(e: serde_json::Error) -> Self {
        raise_error!(
            format!("Invalid template document: {e}"),
            ErrorCode::InvalidParameter
        )
    }
}

impl From<std::io::Error> for TemplateError {
    fn from(e: std::io::Error) -> Self {
        raise_error!(format!("{:#?}", e), ErrorCode::IoError)
    }
}
