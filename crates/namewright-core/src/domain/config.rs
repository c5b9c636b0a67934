use serde::{Deserialize, Serialize};

use crate::domain::naming::{NamingStyle, format_name};

/// Resolved configuration for one renaming run.
///
/// The core never loads or merges configuration itself; callers hand it a
/// fully resolved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameConfiguration {
    pub file_naming_style: NamingStyle,
    pub folder_naming_style: NamingStyle,
    /// Component logic lives in `src/setup` services instead of `src/views`.
    pub use_setup_service: bool,
}

impl RenameConfiguration {
    /// Style applied to an entry depending on whether it is a directory.
    pub fn style_for(&self, is_directory: bool) -> NamingStyle {
        if is_directory {
            self.folder_naming_style
        } else {
            self.file_naming_style
        }
    }

    /// Format a `/`-separated module path: every segment but the last is a
    /// folder, the last one is a file. `.` and `..` segments are kept.
    pub fn format_module_path(&self, path: &str) -> String {
        let segments: Vec<&str> = path.split('/').collect();
        let last = segments.len() - 1;

        segments
            .iter()
            .enumerate()
            .map(|(i, segment)| match *segment {
                "" | "." | ".." => (*segment).to_string(),
                name => format_name(name, self.style_for(i != last)),
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl Default for RenameConfiguration {
    fn default() -> Self {
        Self {
            file_naming_style: NamingStyle::PascalCase,
            folder_naming_style: NamingStyle::KebabCase,
            use_setup_service: true,
        }
    }
}
