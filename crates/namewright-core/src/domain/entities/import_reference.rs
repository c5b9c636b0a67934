//! Import statements that point at renamed components and services.
//!
//! Matching is pattern based, not a module resolver: only whole-line
//! `import … from '…'` statements whose path ends in `setup-service`,
//! `SetupService` or `.vue` are recognised. Anything else is left alone.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::config::RenameConfiguration;

static IMPORT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(?P<prefix>import .* from ['"])(?P<path>[\w@./-]*(?:setup-service|SetupService|\.vue))(?P<suffix>['"];?)$"#,
    )
    .expect("import line pattern is valid")
});

static IMPORT_BASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:@/(?:setup|components)/|(?:\.{1,2}/)+)").expect("import base pattern is valid")
});

/// Module-resolution part of an import path. Never renamed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportBase {
    /// `@/setup/`
    Setup,
    /// `@/components/`
    Components,
    /// A leading run of `./` and `../` segments, e.g. `../../`.
    Relative(String),
}

impl ImportBase {
    fn parse(base: &str) -> Self {
        match base {
            "@/setup/" => Self::Setup,
            "@/components/" => Self::Components,
            relative => Self::Relative(relative.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Setup => "@/setup/",
            Self::Components => "@/components/",
            Self::Relative(run) => run,
        }
    }
}

/// A matched import statement split into its named parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReference {
    /// `import Foo from '` (everything up to the opening quote).
    pub prefix: String,
    pub base: ImportBase,
    /// Path after the base, split on `/`.
    pub segments: Vec<String>,
    /// Closing quote and optional semicolon.
    pub suffix: String,
}

impl ImportReference {
    /// Match a single line (without its line terminator).
    pub fn parse(line: &str) -> Option<Self> {
        let caps = IMPORT_LINE.captures(line)?;
        let path = caps.name("path")?.as_str();
        let base = IMPORT_BASE.find(path)?;

        Some(Self {
            prefix: caps["prefix"].to_string(),
            base: ImportBase::parse(base.as_str()),
            segments: path[base.end()..].split('/').map(str::to_string).collect(),
            suffix: caps["suffix"].to_string(),
        })
    }

    /// The path after the base, joined back with `/`.
    pub fn remainder(&self) -> String {
        self.segments.join("/")
    }

    /// Same reference with its remainder formatted for `config`.
    pub fn renamed(&self, config: &RenameConfiguration) -> Self {
        let formatted = config.format_module_path(&self.remainder());
        Self {
            segments: formatted.split('/').map(str::to_string).collect(),
            ..self.clone()
        }
    }
}

impl fmt::Display for ImportReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.prefix,
            self.base.as_str(),
            self.remainder(),
            self.suffix
        )
    }
}

/// Rewrite every import line of `content`; all other bytes are kept.
pub fn rewrite_imports(content: &str, config: &RenameConfiguration) -> String {
    map_lines(content, |line| {
        ImportReference::parse(line).map(|reference| reference.renamed(config).to_string())
    })
}

/// Apply `rewrite` to each line of `content`, keeping `\n` / `\r\n` endings.
/// Lines for which `rewrite` returns `None` are copied verbatim.
pub(crate) fn map_lines(content: &str, mut rewrite: impl FnMut(&str) -> Option<String>) -> String {
    content
        .split('\n')
        .map(|raw| {
            let (line, cr) = match raw.strip_suffix('\r') {
                Some(line) => (line, "\r"),
                None => (raw, ""),
            };
            match rewrite(line) {
                Some(new_line) => new_line + cr,
                None => raw.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
