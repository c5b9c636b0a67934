//! Application services.
//!
//! Each service owns one step of a run and talks to the disk only through
//! the `Filesystem` port. `NamingStyleService` chains them.

pub mod naming_style_service;
pub mod path_planner;
pub mod reference_rewriter;
pub mod router_rewriter;
pub mod tree_renamer;

pub use naming_style_service::{NamingStyleService, RenameReport, RenameStage, SubtreeRenames};
pub use path_planner::PathPlanner;
pub use reference_rewriter::ReferenceRewriter;
pub use router_rewriter::RouterRewriter;
pub use tree_renamer::TreeRenamer;
