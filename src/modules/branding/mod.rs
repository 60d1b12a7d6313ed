// Copyright © 2025 rustmailer.com
// Licensed under RustMailer License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use crate::modules::settings::cli::{
    Settings, DEFAULT_AUTOMATED_NOTICE, DEFAULT_BRAND_COLOR, DEFAULT_BRAND_NAME,
};
use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

static COLOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

/// Application level branding the templates fall back to.
pub trait Defaults: Send + Sync {
    fn name(&self) -> &str;
    fn slogan(&self) -> &str;
    fn color(&self) -> &str;
    fn logo_url(&self) -> Option<&str>;
    fn automated_notice(&self) -> &str;

    /// `Name - Slogan<br>notice`, used when a footer is added without text.
    fn default_footer(&self) -> String {
        let slogan = self.slogan().trim();
        let headline = if slogan.is_empty() {
            self.name().to_string()
        } else {
            format!("{} - {}", self.name(), slogan)
        };
        format!("{}<br>{}", headline, self.automated_notice())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Branding {
    name: String,
    slogan: String,
    color: String,
    logo_url: Option<String>,
    automated_notice: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            name: DEFAULT_BRAND_NAME.into(),
            slogan: String::new(),
            color: DEFAULT_BRAND_COLOR.into(),
            logo_url: None,
            automated_notice: DEFAULT_AUTOMATED_NOTICE.into(),
        }
    }
}

impl Branding {
    pub fn new(name: impl Into<String>, slogan: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slogan: slogan.into(),
            ..Default::default()
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.mailtemplate_brand_name.as_str(),
            settings.mailtemplate_brand_slogan.as_str(),
        )
        .with_color(&settings.mailtemplate_brand_color)
        .with_logo_url(settings.mailtemplate_brand_logo_url.clone())
        .with_automated_notice(settings.mailtemplate_automated_notice.as_str())
    }

    pub fn with_color(mut self, color: &str) -> Self {
        if COLOR_PATTERN.is_match(color) {
            self.color = color.to_string();
        } else {
            warn!(
                "Ignoring invalid brand color '{}', falling back to {}",
                color, DEFAULT_BRAND_COLOR
            );
            self.color = DEFAULT_BRAND_COLOR.into();
        }
        self
    }

    pub fn with_logo_url(mut self, logo_url: Option<String>) -> Self {
        self.logo_url = logo_url.filter(|url| !url.trim().is_empty());
        self
    }

    pub fn with_automated_notice(mut self, notice: impl Into<String>) -> Self {
        self.automated_notice = notice.into();
        self
    }
}

impl Defaults for Branding {
    fn name(&self) -> &str {
        &self.name
    }

    fn slogan(&self) -> &str {
        &self.slogan
    }

    fn color(&self) -> &str {
        &self.color
    }

    fn logo_url(&self) -> Option<&str> {
        self.logo_url.as_deref()
    }

    fn automated_notice(&self) -> &str {
        &self.automated_notice
    }
}
