use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::LazyLock;

static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct Button {
    /// Visible label of the button.
    pub text: String,
    /// Link target. Passed through as given; the caller owns URL correctness.
    pub url: String,
    /// Label used in the plain text rendering instead of `text`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plain_text: Option<String>,
}

impl Button {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
            plain_text: None,
        }
    }

    pub fn with_plain_text(mut self, plain_text: impl Into<String>) -> Self {
        self.plain_text = Some(plain_text.into());
        self
    }

    pub fn plain_label(&self) -> &str {
        plain_or(&self.plain_text, &self.text)
    }
}

/// One semantic unit of an email, in the order it was added.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Header,
    Heading {
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        plain_title: Option<String>,
    },
    BodyText {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        plain_text: Option<String>,
    },
    ListItem {
        text: String,
        #[serde(default)]
        meta_info: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon_url: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        plain_text: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        plain_meta_info: Option<String>,
    },
    ButtonGroup {
        left: Button,
        right: Button,
    },
    Button(Button),
    /// `None` selects the branding default footer, `Some("")` an empty one.
    /// Documents cannot ask for an empty footer: `""` reads as `None`.
    Footer {
        #[serde(default, deserialize_with = "empty_as_default")]
        text: Option<String>,
    },
}

impl Block {
    pub fn heading(title: impl Into<String>) -> Self {
        Block::Heading {
            title: title.into(),
            plain_title: None,
        }
    }

    pub fn body_text(text: impl Into<String>) -> Self {
        Block::BodyText {
            text: text.into(),
            plain_text: None,
        }
    }

    pub fn list_item(text: impl Into<String>, meta_info: impl Into<String>) -> Self {
        Block::ListItem {
            text: text.into(),
            meta_info: meta_info.into(),
            icon_url: None,
            plain_text: None,
            plain_meta_info: None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Block::Header => "header",
            Block::Heading { .. } => "heading",
            Block::BodyText { .. } => "body_text",
            Block::ListItem { .. } => "list_item",
            Block::ButtonGroup { .. } => "button_group",
            Block::Button(_) => "button",
            Block::Footer { .. } => "footer",
        }
    }
}

fn empty_as_default<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|text| !text.is_empty()))
}

/// Picks the plain text override unless it is missing or empty.
pub fn plain_or<'a>(plain: &'a Option<String>, fallback: &'a str) -> &'a str {
    match plain {
        Some(plain) if !plain.is_empty() => plain.as_str(),
        _ => fallback,
    }
}

/// Splits footer text on `<br>` markers (`<br/>` and `<br />` included).
pub fn split_line_breaks(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    LINE_BREAK.split(text).collect()
}
