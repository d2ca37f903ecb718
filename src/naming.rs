//! Identifier Normalization
//!
//! Pure mapping from raw icon names to target-language identifiers. Every
//! emitter recomputes identifiers from the same names, so this must stay
//! free of hidden state: identical inputs always produce identical outputs.

use heck::{ToLowerCamelCase, ToUpperCamelCase};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
    /// Upper camel case, for component-style targets.
    Pascal,
    /// Lower camel case, for Dart constants.
    Camel,
}

#[derive(Debug, Clone)]
pub struct NamingPolicy {
    pub case: CaseStyle,
    pub reserved: &'static [&'static str],
    pub font_name: String,
}

const REACT_RESERVED: &[&str] = &["React", "Component", "Index"];

/// Dart keywords that cannot name a constant, plus framework names an icon
/// constant must not shadow.
const FLUTTER_RESERVED: &[&str] = &[
    "abstract", "as", "assert", "async", "await", "break", "case", "catch", "class", "const",
    "continue", "covariant", "default", "deferred", "do", "dynamic", "else", "enum", "export",
    "extends", "extension", "external", "factory", "false", "final", "finally", "for", "function",
    "get", "hide", "if", "implements", "import", "in", "interface", "is", "late", "library",
    "mixin", "new", "null", "on", "operator", "part", "required", "rethrow", "return", "set",
    "show", "static", "super", "switch", "sync", "this", "throw", "true", "try", "typedef", "var",
    "void", "while", "with", "yield", "flutter", "iconData",
];

impl NamingPolicy {
    pub fn react(font_name: &str) -> Self {
        Self {
            case: CaseStyle::Pascal,
            reserved: REACT_RESERVED,
            font_name: font_name.to_string(),
        }
    }

    pub fn flutter(font_name: &str) -> Self {
        Self {
            case: CaseStyle::Camel,
            reserved: FLUTTER_RESERVED,
            font_name: font_name.to_string(),
        }
    }
}

/// Font name with its first letter upper-cased, as used by the reserved-word
/// and leading-digit fixups.
pub fn capitalized(font_name: &str) -> String {
    let mut chars = font_name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Maps a raw icon name to a valid identifier under `policy`.
///
/// Case conversion first; a reserved result gets the capitalized font name
/// appended; a leading digit gets it prepended.
pub fn normalize(raw_name: &str, policy: &NamingPolicy) -> String {
    let cased = match policy.case {
        CaseStyle::Pascal => raw_name.to_upper_camel_case(),
        CaseStyle::Camel => raw_name.to_lower_camel_case(),
    };

    let font = capitalized(&policy.font_name);
    let cased = if policy.reserved.contains(&cased.as_str()) {
        format!("{cased}{font}")
    } else {
        cased
    };

    if cased.starts_with(|c: char| c.is_ascii_digit()) {
        format!("{font}{cased}")
    } else {
        cased
    }
}
