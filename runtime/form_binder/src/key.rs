//! The key syntax understood by the binder.
//!
//! | Pattern        | Meaning                                      |
//! |----------------|----------------------------------------------|
//! | `key`          | scalar, boolean or string value              |
//! | `key[N]`       | indexed sequence element, `N` non-negative   |
//! | `key[]`        | unindexed sequence element, appended         |
//! | `key[N].field` | field of a struct stored in a sequence       |
//! | `key.Field`    | struct field, matched by exact name          |
//! | `key[literal]` | map entry, `literal` is bound as the map key |

/// How a form key relates to the prefix the binder is currently resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeySyntax<'k> {
    /// The key is the prefix itself.
    Scalar,
    /// `prefix[N]`, optionally followed by a remainder (e.g. `.field`).
    Indexed {
        index: usize,
        /// `prefix[N]`, sliced out of the original key.
        element_key: &'k str,
    },
    /// `prefix[]`, optionally followed by a remainder.
    Unindexed,
    /// `prefix[literal]` where `literal` is not a non-negative integer.
    Bracketed,
    /// `prefix.field`. The field name is everything after the dot.
    FieldAccess { field: &'k str },
    /// The key doesn't extend the prefix, or is malformed (e.g. `prefix[0`).
    Unrelated,
}

impl<'k> KeySyntax<'k> {
    /// Classify `key` with respect to `prefix`.
    pub(crate) fn parse(prefix: &str, key: &'k str) -> Self {
        let Some(rest) = key.strip_prefix(prefix) else {
            return Self::Unrelated;
        };
        if rest.is_empty() {
            return Self::Scalar;
        }
        if let Some(field) = rest.strip_prefix('.') {
            return Self::FieldAccess { field };
        }
        let Some(bracketed) = rest.strip_prefix('[') else {
            return Self::Unrelated;
        };
        let Some(closing) = bracketed.find(']') else {
            return Self::Unrelated;
        };
        let literal = &bracketed[..closing];
        if literal.is_empty() {
            return Self::Unindexed;
        }
        match parse_index(literal) {
            Some(index) => Self::Indexed {
                index,
                element_key: &key[..prefix.len() + closing + 2],
            },
            None => Self::Bracketed,
        }
    }
}

/// The map key carried by a `prefix[literal]` key: everything between the bracket that
/// follows the prefix and the bracket that ends the key.
///
/// `m[a][b]` carries the map key `a][b`. Returns `None` if the key doesn't end with `]`.
pub(crate) fn map_key<'k>(prefix: &str, key: &'k str) -> Option<&'k str> {
    key.strip_prefix(prefix)?
        .strip_prefix('[')?
        .strip_suffix(']')
}

/// Only plain ASCII digits are accepted: no sign, no whitespace.
fn parse_index(literal: &str) -> Option<usize> {
    if !literal.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    literal.parse().ok()
}
