use regex::Regex;
use std::sync::LazyLock;

/// Prefix that opens a new kit section (and closes the previous one).
pub const SECTION_PREFIX: &str = "Núcleos.";

/// Prefix of the requirements line inside a kit section.
pub const REQUIREMENTS_PREFIX: &str = "Exigências.";

/// Glyph that starts a power sub-entry.
pub const BULLET: char = '•';

// Running headers, footers and page numbers in the book render as bare
// page numbers or as short all-caps tokens (chapter names).
static DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").unwrap());
static CAPS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-ZÁÉÍÓÚÂÊÎÔÛÃÕÇ]{2,}$").unwrap());

// Title-shaped line: starts with an uppercase letter (accents included) and
// contains only letters and spaces. Used both for kit-name recovery and as
// an implicit power boundary.
static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-ZÁÉÍÓÚÂÊÎÔÛÃÕÇ][A-Za-zÁÉÍÓÚÂÊÎÔÛÃÕÇà-ü ]*(?: [A-ZÁÉÍÓÚÂÊÎÔÛÃÕÇ][A-Za-zÁÉÍÓÚÂÊÎÔÛÃÕÇà-ü ]*)*$",
    )
    .unwrap()
});

/// Category of a single trimmed, non-empty line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Page number or all-caps running header; dropped unconditionally.
    Noise,
    /// `Núcleos.` line; payload is the comma-separated category list.
    SectionStart(&'a str),
    /// `Exigências.` line; payload is the raw requirement list.
    Requirements(&'a str),
    /// `•` line; payload is the text after the glyph.
    Bullet(&'a str),
    /// Title-shaped line.
    Heading,
    /// Anything else.
    Continuation,
}

/// Classify one trimmed line. Pure: depends only on the line's own shape.
pub fn classify(line: &str) -> LineClass<'_> {
    if is_noise(line) {
        return LineClass::Noise;
    }
    if let Some(rest) = line.strip_prefix(SECTION_PREFIX) {
        return LineClass::SectionStart(rest);
    }
    if let Some(rest) = line.strip_prefix(REQUIREMENTS_PREFIX) {
        return LineClass::Requirements(rest);
    }
    if let Some(rest) = line.strip_prefix(BULLET) {
        return LineClass::Bullet(rest.trim());
    }
    if is_heading(line) {
        return LineClass::Heading;
    }
    LineClass::Continuation
}

/// True for lines that are running headers/footers/page numbers.
/// Also used by the backward kit-name scan to skip over such lines.
pub fn is_noise(line: &str) -> bool {
    DIGITS_RE.is_match(line) || CAPS_RE.is_match(line)
}

pub fn is_heading(line: &str) -> bool {
    TITLE_RE.is_match(line)
}
