//! Extension to CSS `format()` token and MIME type lookup.

use std::path::Path;

use crate::{config::MIME_FALLBACK, path::extension};

/// Extensions with a dedicated CSS `format()` keyword.
const FORMAT_TOKENS: &[(&str, &str)] = &[
    ("eot", "embedded-opentype"),
    ("otf", "opentype"),
    ("svg", "svg"),
    ("ttf", "truetype"),
    ("woff", "woff"),
    ("woff2", "woff2"),
];

/// CSS `format()` token for a font path.
///
/// Unknown extensions are passed through (lower-cased) as their own token.
pub fn format_token(path: &Path) -> String {
    let ext = extension(path);
    FORMAT_TOKENS
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, token)| (*token).to_owned())
        .unwrap_or(ext)
}

/// MIME type for a font path, [`MIME_FALLBACK`] if the extension is unknown.
pub fn mime_type(path: &Path) -> &'static str {
    mime_guess::from_path(path).first_raw().unwrap_or(MIME_FALLBACK)
}
