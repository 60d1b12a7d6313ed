// Copyright © 2025 rustmailer.com
// Licensed under RustMailer License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

#[macro_export]
macro_rules! mailtemplate_version {
    () => {
        env!("CARGO_PKG_VERSION")
    };
}

#[macro_export]
macro_rules! raise_error {
    ($msg:expr, $code:expr) => {
        $crate::modules::error::TemplateError::Generic {
            message: $msg,
            location: snafu::Location::default(),
            code: $code,
        }
    };
}
