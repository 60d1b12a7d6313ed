// Copyright © 2025 rustmailer.com
// Licensed under RustMailer License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

pub mod branding;
pub mod compose;
pub mod document;
pub mod engine;
pub mod error;
pub mod logger;
pub mod runner;
pub mod settings;
pub mod template;
pub mod utils;
