// Copyright © 2025 rustmailer.com
// Licensed under RustMailer License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use clap::{builder::ValueParser, Parser, ValueEnum};
use std::{fmt, path::PathBuf, sync::LazyLock};
use url::Url;

#[cfg(not(test))]
pub static SETTINGS: LazyLock<Settings> = LazyLock::new(Settings::parse);

#[cfg(test)]
pub static SETTINGS: LazyLock<Settings> = LazyLock::new(Settings::new_for_test);

pub const DEFAULT_BRAND_COLOR: &str = "#0082c9";
pub const DEFAULT_BRAND_NAME: &str = "Mailtemplate";
pub const DEFAULT_AUTOMATED_NOTICE: &str =
    "This is an automatically sent email, please do not reply.";

#[derive(Debug, Parser)]
#[clap(
    name = "mailtemplate",
    about = "Compose transactional emails from semantic blocks and render them as HTML, plain text or a complete multipart message.",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Settings {
    /// mailtemplate log level (default: "info")
    #[clap(
        long,
        default_value = "info",
        env,
        help = "Set the log level for mailtemplate"
    )]
    pub mailtemplate_log_level: String,

    /// Enable ANSI logs (default: false)
    #[clap(long, default_value = "false", env, help = "Enable ANSI formatted logs")]
    pub mailtemplate_ansi_logs: bool,

    /// Enable JSON logs (default: false)
    #[clap(
        long,
        default_value = "false",
        env,
        help = "Enable JSON formatted logs"
    )]
    pub mailtemplate_json_logs: bool,

    /// Template document to render. Reads stdin when omitted.
    #[clap(
        long,
        env,
        help = "Path of the JSON template document (stdin when omitted)"
    )]
    pub mailtemplate_input: Option<PathBuf>,

    #[clap(
        long,
        env,
        value_enum,
        default_value = "html",
        help = "What to write to stdout"
    )]
    pub mailtemplate_output: OutputFormat,

    #[clap(
        long,
        env,
        default_value = DEFAULT_BRAND_NAME,
        help = "Product name used in the header and the default footer"
    )]
    pub mailtemplate_brand_name: String,

    #[clap(
        long,
        env,
        default_value = "",
        help = "Slogan appended to the product name in the default footer"
    )]
    pub mailtemplate_brand_slogan: String,

    #[clap(
        long,
        env,
        default_value = DEFAULT_BRAND_COLOR,
        help = "Primary color of the header bar and buttons (#rgb or #rrggbb)"
    )]
    pub mailtemplate_brand_color: String,

    #[clap(
        long,
        env,
        help = "Absolute URL of the logo shown in the header",
        value_parser = ValueParser::new(|s: &str| {
            let url = Url::parse(s).map_err(|e| format!("Invalid logo URL '{s}': {e}"))?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err("The logo URL must use http or https.".to_string());
            }
            Ok(s.to_string())
        })
    )]
    pub mailtemplate_brand_logo_url: Option<String>,

    #[clap(
        long,
        env,
        default_value = DEFAULT_AUTOMATED_NOTICE,
        help = "Second line of the default footer"
    )]
    pub mailtemplate_automated_notice: String,

    #[clap(
        long,
        env,
        help = "Sender address, required for --mailtemplate-output mime"
    )]
    pub mailtemplate_mime_from: Option<String>,

    #[clap(
        long,
        env,
        help = "Recipient address, required for --mailtemplate-output mime"
    )]
    pub mailtemplate_mime_to: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[clap(name = "html")]
    Html,
    #[clap(name = "text")]
    Text,
    #[clap(name = "subject")]
    Subject,
    #[clap(name = "mime")]
    Mime,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Html => "html",
            OutputFormat::Text => "text",
            OutputFormat::Subject => "subject",
            OutputFormat::Mime => "mime",
        };
        write!(f, "{}", s)
    }
}

impl Settings {
    #[cfg(test)]
    fn new_for_test() -> Self {
        Self {
            mailtemplate_log_level: "info".to_string(),
            mailtemplate_ansi_logs: false,
            mailtemplate_json_logs: false,
            mailtemplate_input: None,
            mailtemplate_output: OutputFormat::Html,
            mailtemplate_brand_name: "Nextcloud".into(),
            mailtemplate_brand_slogan: "a safe home for all your data".into(),
            mailtemplate_brand_color: DEFAULT_BRAND_COLOR.into(),
            mailtemplate_brand_logo_url: Some("https://cloud.example.com/logo.png".into()),
            mailtemplate_automated_notice: DEFAULT_AUTOMATED_NOTICE.into(),
            mailtemplate_mime_from: None,
            mailtemplate_mime_to: None,
        }
    }
}
