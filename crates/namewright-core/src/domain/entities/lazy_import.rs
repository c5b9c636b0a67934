//! Router lazy imports: `import('@/components/<path>.vue')`.

use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::domain::{config::RenameConfiguration, entities::import_reference::map_lines};

static LAZY_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<prefix>import\('@/components/)(?P<path>[^']*)(?P<suffix>\.vue'\))")
        .expect("lazy import pattern is valid")
});

/// A matched lazy import. `segments` is the component path without the
/// `.vue` extension, which stays in `suffix`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LazyImport {
    pub prefix: String,
    pub segments: Vec<String>,
    pub suffix: String,
}

impl LazyImport {
    fn from_captures(caps: &Captures<'_>) -> Self {
        Self {
            prefix: caps["prefix"].to_string(),
            segments: caps["path"].split('/').map(str::to_string).collect(),
            suffix: caps["suffix"].to_string(),
        }
    }

    /// First lazy import found in `line`.
    pub fn find(line: &str) -> Option<Self> {
        LAZY_IMPORT.captures(line).map(|caps| Self::from_captures(&caps))
    }

    pub fn renamed(&self, config: &RenameConfiguration) -> Self {
        let formatted = config.format_module_path(&self.segments.join("/"));
        Self {
            segments: formatted.split('/').map(str::to_string).collect(),
            ..self.clone()
        }
    }
}

impl fmt::Display for LazyImport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix, self.segments.join("/"), self.suffix)
    }
}

/// Rewrite the lazy imports of a router module. Text outside the captured
/// paths, and lines without a lazy import, are kept byte for byte.
pub fn rewrite_lazy_imports(content: &str, config: &RenameConfiguration) -> String {
    map_lines(content, |line| {
        if !LAZY_IMPORT.is_match(line) {
            return None;
        }
        let rewritten = LAZY_IMPORT.replace_all(line, |caps: &Captures<'_>| {
            LazyImport::from_captures(caps).renamed(config).to_string()
        });
        Some(rewritten.into_owned())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::naming::NamingStyle;

    fn config() -> RenameConfiguration {
        RenameConfiguration {
            file_naming_style: NamingStyle::PascalCase,
            folder_naming_style: NamingStyle::KebabCase,
            use_setup_service: false,
        }
    }

    #[test]
    fn rewrites_router_lazy_import() {
        let line = "const x = () => import('@/components/userProfile/userCard.vue')";
        assert_eq!(
            rewrite_lazy_imports(line, &config()),
            "const x = () => import('@/components/user-profile/UserCard.vue')"
        );
    }

    #[test]
    fn find_exposes_segments_without_extension() {
        let found = LazyImport::find("component: () => import('@/components/a/b/myPage.vue'),")
            .unwrap();
        assert_eq!(found.segments, vec!["a", "b", "myPage"]);
        assert_eq!(found.suffix, ".vue')");
    }

    #[test]
    fn keeps_text_around_the_import() {
        let line = "  { path: '/user', component: () => import('@/components/UserPage.vue') },";
        let expected =
            "  { path: '/user', component: () => import('@/components/UserPage.vue') },";
        assert_eq!(rewrite_lazy_imports(line, &config()), expected);

        let camel = RenameConfiguration {
            file_naming_style: NamingStyle::CamelCase,
            ..config()
        };
        assert_eq!(
            rewrite_lazy_imports(line, &camel),
            "  { path: '/user', component: () => import('@/components/userPage.vue') },"
        );
    }

    #[test]
    fn rewrites_every_import_on_a_line() {
        let line = "[import('@/components/A/userA.vue'), import('@/components/B/userB.vue')]";
        assert_eq!(
            rewrite_lazy_imports(line, &config()),
            "[import('@/components/a/UserA.vue'), import('@/components/b/UserB.vue')]"
        );
    }

    #[test]
    fn other_lines_pass_through() {
        let content = "import { createRouter } from 'vue-router';\n\
                       const Home = () => import('@/views/HomeView.vue');\n";
        assert_eq!(rewrite_lazy_imports(content, &config()), content);
    }
}
