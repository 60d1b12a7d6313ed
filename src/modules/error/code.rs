// Copyright © 2025 rustmailer.com
// Licensed under RustMailer License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorCode {
    // Caller errors (10000–10999)
    InvalidParameter = 10000,
    MissingConfiguration = 10020,

    // Rendering errors (50000–50999)
    TemplateRenderFailed = 50000,
    MessageBuildFailed = 50010,

    // Internal system errors (70000–70999)
    InternalError = 70000,
    IoError = 70010,
}

impl ErrorCode {
    /// Process exit status used by the command line front end.
    pub fn exit_status(&self) -> i32 {
        match self {
            ErrorCode::InvalidParameter | ErrorCode::MissingConfiguration => 2,
            ErrorCode::TemplateRenderFailed | ErrorCode::MessageBuildFailed => 3,
            ErrorCode::InternalError | ErrorCode::IoError => 1,
        }
    }
}
