use crate::modules::error::code::ErrorCode;
use crate::modules::error::TemplateResult;
use crate::raise_error;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "templates/"]
pub struct TemplateAssets;

impl TemplateAssets {
    pub fn content(file: &str) -> TemplateResult<String> {
        let asset = Self::get(file).ok_or_else(|| {
            raise_error!(
                format!("Embedded template '{file}' not found."),
                ErrorCode::MissingConfiguration
            )
        })?;
        String::from_utf8(asset.data.into_owned()).map_err(|e| {
            raise_error!(
                format!("Embedded template '{file}' is not UTF-8: {e}"),
                ErrorCode::InternalError
            )
        })
    }
}
