use serde::{Deserialize, Serialize};

const WEB_PREFIXES: [&str; 2] = ["http://", "https://"];

/// How a target is handed to the OS
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    WebUrl,
    Path,
}

/// A web URL or a filesystem entry to open
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Target(String);

impl Target {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-sensitive prefix match; anything that is not `http://` or
    /// `https://` is treated as a path.
    pub fn kind(&self) -> TargetKind {
        if WEB_PREFIXES.iter().any(|prefix| self.0.starts_with(prefix)) {
            TargetKind::WebUrl
        } else {
            TargetKind::Path
        }
    }
}

impl From<String> for Target {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<Target> for String {
    fn from(target: Target) -> Self {
        target.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_prefixes_are_urls() {
        for url in ["http://example.com", "https://example.com/a?b=c", "https://"] {
            assert_eq!(Target::new(url).kind(), TargetKind::WebUrl, "{url}");
        }
    }

    #[test]
    fn test_everything_else_is_a_path() {
        for path in [
            "/no/such/file",
            "C:\\Program Files\\App\\app.exe",
            "HTTP://example.com",
            "Https://example.com",
            "ftp://example.com",
            "www.example.com",
            " https://example.com",
            "",
        ] {
            assert_eq!(Target::new(path).kind(), TargetKind::Path, "{path:?}");
        }
    }

    #[test]
    fn test_target_is_a_bare_string_on_the_wire() {
        let target: Target = serde_json::from_str("\"/tmp/notes.txt\"").unwrap();
        assert_eq!(target.as_str(), "/tmp/notes.txt");
        assert_eq!(serde_json::to_string(&target).unwrap(), "\"/tmp/notes.txt\"");
    }
}
