/*
 * identifier.rs
 * Copyright (c) 2025 Posit, PBC
 */

use once_cell::sync::Lazy;
use regex::Regex;

// ECMAScript IdentifierName: IdentifierStart IdentifierPart*
static IDENTIFIER_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[$_\p{ID_Start}][$\x{200C}\x{200D}\p{ID_Continue}]*$")
        .expect("identifier regex is valid")
});

/// Check whether `name` can be used as a JavaScript identifier name.
///
/// Reserved words are identifier names too, so they are accepted.
pub fn is_identifier_name(name: &str) -> bool {
    IDENTIFIER_NAME.is_match(name)
}
