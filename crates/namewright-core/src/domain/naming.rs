//! Naming styles and the name formatter.
//!
//! [`format_name`] is the single place where a file or folder name is turned
//! into a naming convention. Everything else (planning, import rewriting,
//! router rewriting) calls it segment by segment.

use std::fmt;
use std::str::FromStr;

use heck::{ToKebabCase, ToLowerCamelCase, ToUpperCamelCase};
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// A naming convention for file and folder base names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamingStyle {
    #[serde(rename = "PascalCase", alias = "pascal")]
    PascalCase,
    #[serde(rename = "camelCase", alias = "camel")]
    CamelCase,
    #[serde(rename = "kebab-case", alias = "kebab")]
    KebabCase,
}

impl NamingStyle {
    pub const ALL: [NamingStyle; 3] = [Self::PascalCase, Self::CamelCase, Self::KebabCase];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::PascalCase => "PascalCase",
            Self::CamelCase => "camelCase",
            Self::KebabCase => "kebab-case",
        }
    }
}

impl fmt::Display for NamingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NamingStyle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "pascalcase" | "pascal" => Ok(Self::PascalCase),
            "camelcase" | "camel" => Ok(Self::CamelCase),
            "kebabcase" | "kebab" => Ok(Self::KebabCase),
            _ => Err(DomainError::UnknownNamingStyle(s.to_string())),
        }
    }
}

/// Format a file or folder name into `style`.
///
/// A trailing extension matching `.[a-z]{2,}` (`.ts`, `.vue`, ...) is split
/// off first and reattached untouched, so its letters never take part in
/// word splitting or case conversion.
///
/// ```
/// use namewright_core::domain::{NamingStyle, format_name};
///
/// assert_eq!(format_name("my-comp.vue", NamingStyle::PascalCase), "MyComp.vue");
/// assert_eq!(format_name("UserProfile", NamingStyle::KebabCase), "user-profile");
/// assert_eq!(format_name("user_card.ts", NamingStyle::CamelCase), "userCard.ts");
/// ```
pub fn format_name(name: &str, style: NamingStyle) -> String {
    let (base, extension) = split_extension(name);

    let formatted = match style {
        // Every uppercase letter starts a word, so PascalCase and camelCase
        // input come back unchanged (including runs such as `HTTPServer`).
        NamingStyle::PascalCase => spread_uppercase(base).to_upper_camel_case(),
        // Single-letter words leave uppercase runs (`a-b-c` -> `aBC`) that a
        // second pass splits differently; the second pass is a fixed point.
        NamingStyle::CamelCase => base.to_lower_camel_case().to_lower_camel_case(),
        NamingStyle::KebabCase => base.to_kebab_case(),
    };

    formatted + extension
}

/// Split `name` into `(base, extension)` where `extension` keeps its dot.
fn split_extension(name: &str) -> (&str, &str) {
    let Some(dot) = name.rfind('.') else {
        return (name, "");
    };

    let extension = &name[dot + 1..];
    if extension.len() >= 2 && extension.bytes().all(|b| b.is_ascii_lowercase()) {
        (&name[..dot], &name[dot..])
    } else {
        (name, "")
    }
}

fn spread_uppercase(base: &str) -> String {
    let mut out = String::with_capacity(base.len() * 2);
    for c in base.chars() {
        if c.is_uppercase() {
            out.push(' ');
        }
        out.push(c);
    }
    out
}
