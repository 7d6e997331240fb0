use std::fmt;

use thiserror::Error;
use url::Url;

/// A normalized analysis target: an absolute URL with an explicit
/// `http://` or `https://` scheme. Only [`normalize`] constructs these.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target(String);

impl Target {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidUrl {
    #[error("no URL was entered")]
    Empty,
    #[error("not a valid website URL: {0}")]
    Unparseable(String),
}

/// Normalizes raw user input into a [`Target`].
///
/// A missing scheme is patched with `https://` before parsing, so bare
/// domains like `example.com` are accepted while garbage input still
/// fails. The returned target keeps the patched input string rather than
/// the re-serialized URL, so `example.com` becomes exactly
/// `https://example.com`.
pub fn normalize(raw: &str) -> Result<Target, InvalidUrl> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InvalidUrl::Empty);
    }

    let candidate = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    match Url::parse(&candidate) {
        Ok(parsed) if parsed.host_str().is_some() => Ok(Target(candidate)),
        Ok(_) => Err(InvalidUrl::Unparseable("missing host".to_string())),
        Err(err) => Err(InvalidUrl::Unparseable(err.to_string())),
    }
}
