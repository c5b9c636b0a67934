pub mod import_reference;
pub mod lazy_import;
pub mod rename_plan;

pub use import_reference::{ImportBase, ImportReference, rewrite_imports};
pub use lazy_import::{LazyImport, rewrite_lazy_imports};
pub use rename_plan::{DirectoryEntry, EntryKind, RenamePlan, RenamePlanItem, execution_cmp};
