// Copyright © 2025 rustmailer.com
// Licensed under RustMailer License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

pub mod block;
pub mod builder;
pub mod href;
pub mod preview;
pub mod text;
pub mod traits;
#[cfg(test)]
mod tests;
