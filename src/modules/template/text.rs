use crate::modules::branding::Defaults;
use crate::modules::template::block::{plain_or, split_line_breaks, Block};

/// Plain text counterpart of the HTML rendering. Text is used verbatim, the
/// only rewrite is footer `<br>` markers becoming newlines.
pub fn render_text(blocks: &[Block], defaults: &dyn Defaults) -> String {
    let mut out = String::new();
    let mut in_list = false;

    for block in blocks {
        let is_list_item = matches!(block, Block::ListItem { .. });
        if in_list && !is_list_item {
            out.push('\n');
        }
        in_list = is_list_item;

        match block {
            Block::Header => {}
            Block::Heading { title, plain_title } => {
                out.push_str(plain_or(plain_title, title));
                out.push_str("\n\n");
            }
            Block::BodyText { text, plain_text } => {
                out.push_str(plain_or(plain_text, text));
                out.push_str("\n\n");
            }
            Block::ListItem {
                text,
                meta_info,
                plain_text,
                plain_meta_info,
                ..
            } => {
                out.push_str("  * ");
                out.push_str(plain_or(plain_text, text));
                out.push('\n');
                let meta = plain_or(plain_meta_info, meta_info);
                if !meta.is_empty() {
                    out.push_str("    ");
                    out.push_str(meta);
                    out.push('\n');
                }
            }
            Block::ButtonGroup { left, right } => {
                push_link(&mut out, left.plain_label(), &left.url);
                push_link(&mut out, right.plain_label(), &right.url);
                out.push('\n');
            }
            Block::Button(button) => {
                push_link(&mut out, button.plain_label(), &button.url);
                out.push('\n');
            }
            Block::Footer { text } => {
                let footer = match text {
                    Some(text) => text.clone(),
                    None => defaults.default_footer(),
                };
                out.push_str("--\n");
                for line in split_line_breaks(&footer) {
                    out.push_str(line);
                    out.push('\n');
                }
            }
        }
    }

    if in_list {
        out.push('\n');
    }
    out
}

fn push_link(out: &mut String, label: &str, url: &str) {
    out.push_str(label);
    out.push_str(": ");
    out.push_str(url);
    out.push('\n');
}
