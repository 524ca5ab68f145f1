//! Stylesheet rendering and concatenation.
//!
//! Every rendered fragment starts with a sentinel header naming the file(s) it
//! came from:
//!
//! ```text
//! /**
//!  *  "/fonts/logo.ttf"
//!  *  "/fonts/logo.otf"
//!  */
//! ```
//!
//! Concatenation replaces one such leading header with a header naming the
//! fragment itself, so concatenating already-annotated output never doubles
//! the headers.
//!
//! Inside the header a backslash is written as `\\` and a slash following `*`
//! as `\/`, so no path can close the comment early.

use std::path::Path;

use base64::{Engine, engine::general_purpose::STANDARD};

use crate::{
    format::{format_token, mime_type},
    record::{CssFragment, FileRecord, FontGroup},
};

const HEADER_OPEN: &str = "/**";
const HEADER_PATH_PREFIX: &str = " *  \"";
const HEADER_CLOSE: &str = " */";

/// Render a group as a `@font-face` rule preceded by its sentinel header.
pub fn render_font_face(group: &FontGroup) -> String {
    let mut css = sentinel_header(group.members().iter().map(FileRecord::path));
    let src: Vec<String> = group.members().iter().map(data_url).collect();

    css.push_str("@font-face {\n");
    css.push_str(&format!("  font-family: '{}';\n", escape_family(group.family_name())));
    css.push_str(&format!("  src: {};\n", src.join(", ")));
    css.push_str("}\n");
    css
}

/// Join fragments in order, each behind a sentinel header naming its path.
pub fn concatenate(fragments: &[CssFragment]) -> Vec<u8> {
    let mut out = String::new();
    for fragment in fragments {
        let text = fragment.text();
        let body = strip_sentinel_header(&text).trim_matches(['\n', '\r']);

        out.push('\n');
        out.push_str(&sentinel_header([fragment.path()]));
        out.push_str(body);
        out.push('\n');
    }
    out.into_bytes()
}

/// Remove one leading sentinel header; text without one is returned as is.
pub fn strip_sentinel_header(text: &str) -> &str {
    match parse_sentinel_header(text) {
        Some((_, rest)) => rest,
        None => text,
    }
}

/// Paths listed in the leading sentinel header, empty if there is none.
pub fn sentinel_paths(text: &str) -> Vec<String> {
    parse_sentinel_header(text)
        .map(|(paths, _)| paths.into_iter().map(unescape_header_path).collect())
        .unwrap_or_default()
}

fn sentinel_header<'a>(paths: impl IntoIterator<Item = &'a Path>) -> String {
    let mut header = String::from(HEADER_OPEN);
    header.push('\n');
    for path in paths {
        let path = escape_header_path(&path.display().to_string());
        header.push_str(&format!("{HEADER_PATH_PREFIX}{path}\"\n"));
    }
    header.push_str(HEADER_CLOSE);
    header.push('\n');
    header
}

fn parse_sentinel_header(text: &str) -> Option<(Vec<&str>, &str)> {
    let (open, mut rest) = next_line(text.trim_start_matches(['\n', '\r']))?;
    if open.trim_end() != HEADER_OPEN {
        return None;
    }

    let mut paths = Vec::new();
    loop {
        let (line, tail) = next_line(rest)?;
        let line = line.trim_end_matches('\r');
        if line == HEADER_CLOSE {
            return (!paths.is_empty()).then_some((paths, tail));
        }
        paths.push(line.strip_prefix(HEADER_PATH_PREFIX)?.strip_suffix('"')?);
        rest = tail;
    }
}

fn escape_header_path(path: &str) -> String {
    let mut escaped = String::with_capacity(path.len());
    let mut after_star = false;
    for c in path.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '/' if after_star => escaped.push_str("\\/"),
            _ => escaped.push(c),
        }
        after_star = c == '*';
    }
    escaped
}

fn unescape_header_path(path: &str) -> String {
    let mut unescaped = String::with_capacity(path.len());
    let mut chars = path.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            unescaped.extend(chars.next());
        } else {
            unescaped.push(c);
        }
    }
    unescaped
}

fn next_line(text: &str) -> Option<(&str, &str)> {
    if text.is_empty() {
        return None;
    }
    Some(text.split_once('\n').unwrap_or((text, "")))
}

fn data_url(record: &FileRecord) -> String {
    format!(
        "url(data:{};base64,{}) format('{}')",
        mime_type(record.path()),
        STANDARD.encode(record.data()),
        format_token(record.path())
    )
}

fn escape_family(name: &str) -> String {
    name.replace('\\', "\\\\").replace('\'', "\\'")
}
