use crate::modules::error::code::ErrorCode;
use crate::modules::error::TemplateResult;
use crate::modules::settings::cli::SETTINGS;
use crate::raise_error;
use chrono::Local;
use tracing::Level;
use tracing_subscriber::fmt::{format::Writer, time::FormatTime};

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z"))
    }
}

/// Installs the global subscriber. Logs go to stderr because stdout carries
/// the rendered output.
pub fn initialize_logging() -> TemplateResult<()> {
    let level = validate_log_level(&SETTINGS.mailtemplate_log_level)?;
    let with_ansi = SETTINGS.mailtemplate_ansi_logs;

    let result = if SETTINGS.mailtemplate_json_logs {
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_max_level(level)
            .with_timer(LocalTimer)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let format = tracing_subscriber::fmt::format()
            .with_level(true)
            .with_target(true)
            .with_timer(LocalTimer);

        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(with_ansi)
            .with_writer(std::io::stderr)
            .event_format(format)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    };

    result.map_err(|e| raise_error!(format!("{:#?}", e), ErrorCode::InternalError))
}

fn validate_log_level(value: &str) -> TemplateResult<Level> {
    value.parse::<Level>().map_err(|_| {
        raise_error!(
            format!(
                "Invalid log level specified. Use one of: error, warn, info, debug, trace. \
                The log level you currently specified is 'mailtemplate_log_level'='{}'",
                value
            ),
            ErrorCode::MissingConfiguration
        )
    })
}
