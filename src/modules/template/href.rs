use tracing::warn;
use url::Url;

const BLOCKED_SCHEMES: [&str; 3] = ["javascript", "vbscript", "data"];

/// Link target for an `href` attribute. Script-capable schemes become `#`,
/// everything else (relative or malformed URLs included) passes through and
/// is attribute-escaped by the template engine.
pub fn sanitize_href(url: &str) -> &str {
    match Url::parse(url.trim()) {
        Ok(parsed) if BLOCKED_SCHEMES.contains(&parsed.scheme()) => {
            warn!("Replacing '{}:' link target with '#'", parsed.scheme());
            "#"
        }
        _ => url,
    }
}
