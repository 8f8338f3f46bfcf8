use std::{fmt, sync::OnceLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Name of the hidden form field the server renders the token into.
pub const CSRF_FIELD_NAME: &str = "csrfmiddlewaretoken";

/// Anti-forgery token echoed back to the server on mutating requests.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CsrfToken(String);

impl CsrfToken {
    pub fn new(value: impl Into<String>) -> Self {
        CsrfToken(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extract the token from a server-rendered page.
    ///
    /// Looks for an `<input>` whose `name` is `csrfmiddlewaretoken` and
    /// returns its `value`. Returns `None` when no such field exists.
    pub fn from_html(page: &str) -> Option<Self> {
        input_tag_re().find_iter(page).find_map(|tag| {
            let mut name = None;
            let mut value = None;
            for caps in attribute_re().captures_iter(tag.as_str()) {
                let attr = caps[1].to_ascii_lowercase();
                let attr_value = caps
                    .get(2)
                    .or_else(|| caps.get(3))
                    .or_else(|| caps.get(4))
                    .map(|m| m.as_str());
                match attr.as_str() {
                    "name" => name = attr_value,
                    "value" => value = attr_value,
                    _ => {}
                }
            }
            match name {
                Some(CSRF_FIELD_NAME) => value.map(CsrfToken::new),
                _ => None,
            }
        })
    }
}

impl From<String> for CsrfToken {
    fn from(value: String) -> Self {
        CsrfToken(value)
    }
}

impl From<&str> for CsrfToken {
    fn from(value: &str) -> Self {
        CsrfToken(value.to_string())
    }
}

// tokens are secrets, keep them out of debug logs
impl fmt::Debug for CsrfToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CsrfToken(..)")
    }
}

fn input_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<input\b[^>]*>").expect("valid input tag pattern"))
}

// one `name=value` pair; quoted values are consumed whole so attribute-like
// text inside them is never seen as an attribute
fn attribute_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"([^\s=/>]+)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#)
            .expect("valid attribute pattern")
    })
}
