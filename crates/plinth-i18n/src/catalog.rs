//! Message catalog with default-locale fallback and interpolation.
//!
//! # Invariants
//!
//! 1. **Fallback is single-step**: a lookup tries the requested locale, then
//!    the default locale, then gives up. No chains, no recursion.
//!
//! 2. **Interpolation is idempotent**: `format()` replaces `{name}` tokens in
//!    a single pass; substituted values are never re-scanned.
//!
//! 3. **Thread safety**: `MessageCatalog` is `Send + Sync` (all data is
//!    immutable after construction).
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing key | Key in neither locale | Returns `None` |
//! | Missing locale | Locale never registered | Falls back to default |
//! | Bad interpolation arg | `{name}` but no `name` arg | Token left as-is |
//! | Malformed JSON | Message file is not a flat string map | `ParseError` |

use std::collections::HashMap;

use tracing::debug;

/// Locale identifier (e.g., `"en"`, `"de"`, `"pt-BR"`).
pub type Locale = String;

/// Errors from catalog construction.
#[derive(Debug, Clone)]
pub enum I18nError {
    /// A locale tag was empty or malformed.
    InvalidLocale(String),
    /// A message file could not be parsed as a flat string map.
    ParseError { locale: String, message: String },
}

impl std::fmt::Display for I18nError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLocale(l) => write!(f, "invalid locale: {l}"),
            Self::ParseError { locale, message } => {
                write!(f, "failed to parse messages for '{locale}': {message}")
            }
        }
    }
}

impl std::error::Error for I18nError {}

/// Per-locale message maps with a designated default locale.
///
/// # Example
///
/// ```
/// use plinth_i18n::MessageCatalog;
///
/// let mut catalog = MessageCatalog::new("en");
/// catalog
///     .add_locale_json("en", r#"{"greeting": "Hello, {name}!"}"#)
///     .unwrap();
/// catalog.add_locale_json("de", r#"{}"#).unwrap();
///
/// assert_eq!(
///     catalog.format("en", "greeting", &[("name", "Ada")]),
///     Some("Hello, Ada!".into())
/// );
/// // "de" has no greeting; the default locale covers it.
/// assert_eq!(catalog.get("de", "greeting"), Some("Hello, {name}!"));
/// ```
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    locales: HashMap<Locale, HashMap<String, String>>,
    default_locale: Locale,
}

impl MessageCatalog {
    /// Create an empty catalog with the given default locale.
    #[must_use]
    pub fn new(default_locale: impl Into<Locale>) -> Self {
        Self {
            locales: HashMap::new(),
            default_locale: default_locale.into(),
        }
    }

    /// The locale used when a key is missing from the requested one.
    #[must_use]
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Register messages for a locale.
    pub fn add_locale(&mut self, locale: impl Into<Locale>, messages: HashMap<String, String>) {
        self.locales.insert(locale.into(), messages);
    }

    /// Register messages for a locale from a flat JSON object.
    pub fn add_locale_json(
        &mut self,
        locale: impl Into<Locale>,
        json: &str,
    ) -> Result<(), I18nError> {
        let locale = locale.into();
        if locale.is_empty() {
            return Err(I18nError::InvalidLocale(locale));
        }
        let messages: HashMap<String, String> =
            serde_json::from_str(json).map_err(|e| I18nError::ParseError {
                locale: locale.clone(),
                message: e.to_string(),
            })?;
        self.locales.insert(locale, messages);
        Ok(())
    }

    /// Whether the locale was registered.
    #[must_use]
    pub fn has_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// All registered locale tags, sorted.
    #[must_use]
    pub fn locales(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Look up a message, falling back to the default locale.
    #[must_use]
    pub fn get(&self, locale: &str, key: &str) -> Option<&str> {
        if let Some(msg) = self.locales.get(locale).and_then(|m| m.get(key)) {
            return Some(msg.as_str());
        }
        if locale != self.default_locale {
            if let Some(msg) = self
                .locales
                .get(self.default_locale.as_str())
                .and_then(|m| m.get(key))
            {
                debug!(locale, key, "message resolved via default locale");
                return Some(msg.as_str());
            }
        }
        None
    }

    /// Look up a message and perform `{name}` interpolation.
    ///
    /// Each `(name, value)` pair in `args` replaces `{name}` in the template.
    /// Tokens without matching args are left as-is.
    #[must_use]
    pub fn format(&self, locale: &str, key: &str, args: &[(&str, &str)]) -> Option<String> {
        self.get(locale, key)
            .map(|template| interpolate(template, args))
    }
}

/// Single-pass `{name}` interpolation. Unmatched tokens left as-is.
fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '{' {
            let mut token = String::new();
            let mut found_close = false;
            for c in chars.by_ref() {
                if c == '}' {
                    found_close = true;
                    break;
                }
                token.push(c);
            }

            if found_close {
                if let Some(&(_, value)) = args.iter().find(|&&(name, _)| name == token) {
                    result.push_str(value);
                } else {
                    result.push('{');
                    result.push_str(&token);
                    result.push('}');
                }
            } else {
                // Unclosed brace: emit as-is.
                result.push('{');
                result.push_str(&token);
            }
        } else {
            result.push(ch);
        }
    }

    result
}
