//! Type token grammar
//!
//! A leaf schema is a *type token*: one or more lowercase words of at least four
//! letters, or the wildcard `*`, joined by `|` into a union.
//!
//! ```text
//! string
//! string|nullable
//! integer|double|nullable
//! *
//! ```
//!
//! Tokens are parsed once into a [`TypeToken`] holding the set of accepted
//! [`TypeTag`]s, so comparisons never split or search the raw text again.
//!
//! | word       | accepts                  |
//! |------------|--------------------------|
//! | `string`   | [`TypeTag::String`]      |
//! | `integer`  | [`TypeTag::Integer`]     |
//! | `double`, `float` | [`TypeTag::Float`] |
//! | `boolean`  | [`TypeTag::Boolean`]     |
//! | `array`    | [`TypeTag::List`], [`TypeTag::Object`] |
//! | `list`     | [`TypeTag::List`]        |
//! | `object`   | [`TypeTag::Object`]      |
//! | `nullable` | [`TypeTag::Null`]        |
//! | `*`        | everything               |
//!
//! Any other word that fits the grammar is accepted and matches nothing.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::{SchemaError, TypeTag, Validation, Violation, Violations};

/// Separator between union members.
pub const DELIMITER: char = '|';
/// Matches any runtime type.
pub const WILDCARD: &str = "*";
/// The pseudo-type standing for `null`.
pub const NULLABLE: &str = "nullable";

static GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z]{4,}|\*)(\|([a-z]{4,}|\*))*$").expect("type token grammar is a valid regex")
});

/// Whether `token` follows the type token grammar.
///
/// ```
/// use schemacheck::token::is_schema_valid;
///
/// assert!(is_schema_valid("string|nullable"));
/// assert!(is_schema_valid("*"));
/// assert!(!is_schema_valid("string|nullable|"));
/// assert!(!is_schema_valid("1"));
/// ```
pub fn is_schema_valid(token: &str) -> bool {
    GRAMMAR.is_match(token)
}

/// Every word with a meaning, wildcard excluded.
pub const KNOWN_WORDS: [&str; 9] = [
    "string", "integer", "double", "float", "boolean", "array", "list", "object", NULLABLE,
];

/// The canonical word naming exactly `tag`.
///
/// ```
/// use schemacheck::TypeTag;
/// use schemacheck::token::word_for;
///
/// assert_eq!(word_for(TypeTag::Null), "nullable");
/// assert_eq!(word_for(TypeTag::List), "list");
/// ```
pub fn word_for(tag: TypeTag) -> &'static str {
    match tag {
        TypeTag::String => "string",
        TypeTag::Integer => "integer",
        TypeTag::Float => "double",
        TypeTag::Boolean => "boolean",
        TypeTag::Object => "object",
        TypeTag::List => "list",
        TypeTag::Null => NULLABLE,
    }
}

fn tags_for_word(word: &str) -> &'static [TypeTag] {
    match word {
        "string" => &[TypeTag::String],
        "integer" => &[TypeTag::Integer],
        "double" | "float" => &[TypeTag::Float],
        "boolean" => &[TypeTag::Boolean],
        "array" => &[TypeTag::List, TypeTag::Object],
        "list" => &[TypeTag::List],
        "object" => &[TypeTag::Object],
        NULLABLE => &[TypeTag::Null],
        _ => &[],
    }
}

/// A parsed leaf schema.
///
/// # Examples
///
/// ```
/// use schemacheck::{TypeTag, TypeToken};
///
/// let token: TypeToken = "string|nullable".parse().unwrap();
/// assert!(token.includes(TypeTag::String));
/// assert!(token.includes(TypeTag::Null));
/// assert!(!token.includes(TypeTag::Integer));
/// assert!(token.is_nullable());
/// assert_eq!(token.as_str(), "string|nullable");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeToken {
    raw: String,
    allowed: BTreeSet<TypeTag>,
    wildcard: bool,
}

impl TypeToken {
    /// Parse a token, rejecting anything outside the grammar.
    pub fn parse(token: &str) -> Result<Self, SchemaError> {
        if !is_schema_valid(token) {
            return Err(SchemaError::InvalidToken {
                key: None,
                token: token.to_string(),
            });
        }

        let mut allowed = BTreeSet::new();
        let mut wildcard = false;
        for word in token.split(DELIMITER) {
            if word == WILDCARD {
                wildcard = true;
                continue;
            }
            let tags = tags_for_word(word);
            if tags.is_empty() {
                #[cfg(feature = "tracing")]
                tracing::debug!(word, token, "type word matches no runtime type");
            }
            allowed.extend(tags.iter().copied());
        }

        Ok(TypeToken {
            raw: token.to_string(),
            allowed,
            wildcard,
        })
    }

    /// The token exactly as written in the schema.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether the token contains the wildcard.
    pub fn is_wildcard(&self) -> bool {
        self.wildcard
    }

    /// Whether `nullable` is one of the union members.
    pub fn is_nullable(&self) -> bool {
        self.allowed.contains(&TypeTag::Null)
    }

    /// Runtime types accepted by name. Empty for a bare wildcard.
    pub fn allowed(&self) -> impl Iterator<Item = TypeTag> + '_ {
        self.allowed.iter().copied()
    }

    /// Whether a value of type `actual` satisfies this token.
    ///
    /// Union membership is a set test: member order and duplicates do not matter.
    pub fn includes(&self, actual: TypeTag) -> bool {
        self.wildcard || self.allowed.contains(&actual)
    }

    /// Compare `actual` against this token, reporting a mismatch under `key`.
    ///
    /// ```
    /// use schemacheck::{TypeTag, TypeToken};
    ///
    /// let token = TypeToken::parse("string").unwrap();
    /// let outcome = token.check("name", TypeTag::Boolean);
    ///
    /// assert_eq!(
    ///     outcome.errors().unwrap().to_string(),
    ///     "Unexpected type of key: \"name\". Expected: \"string\", got: \"boolean\""
    /// );
    /// ```
    pub fn check(&self, key: &str, actual: TypeTag) -> Validation<(), Violations> {
        if self.includes(actual) {
            Validation::success(())
        } else {
            Validation::failure(Violations::from(Violation::type_mismatch(
                key,
                actual,
                self.as_str(),
            )))
        }
    }
}

impl FromStr for TypeToken {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeToken::parse(s)
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Check one key's runtime type against a raw token.
///
/// The grammar is checked first; a malformed token is a schema error no matter
/// what the data looks like.
///
/// ```
/// use schemacheck::TypeTag;
/// use schemacheck::token::validate_key_type;
///
/// assert!(validate_key_type("avatar", TypeTag::Null, "string|nullable").unwrap().is_success());
/// assert!(validate_key_type("avatar", TypeTag::Null, "1").is_err());
/// ```
pub fn validate_key_type(
    key: &str,
    actual: TypeTag,
    expected: &str,
) -> Result<Validation<(), Violations>, SchemaError> {
    let token = TypeToken::parse(expected).map_err(|_| SchemaError::InvalidToken {
        key: Some(key.to_string()),
        token: expected.to_string(),
    })?;
    Ok(token.check(key, actual))
}
