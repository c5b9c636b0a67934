//! Implementation of the `namewright rename` command.
//!
//! Responsibility: merge CLI flags over the loaded configuration, call the
//! core naming-style service, and display results. No renaming logic lives
//! here.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use namewright_adapters::LocalFilesystem;
use namewright_core::{
    application::{NamingStyleService, RenameReport},
    domain::{ProjectLayout, RenameConfiguration, RenamePlan},
};

use crate::{
    cli::{GlobalArgs, OutputFormat, RenameArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    progress::SpinnerProgress,
    prompt,
};

const CONFIRM_QUESTION: &str = "You may commit your changes before. Continue?";

/// Execute the `namewright rename` command.
///
/// Dispatch sequence:
/// 1. Resolve the naming configuration (flags over config)
/// 2. Check that the project has the expected layout
/// 3. Early-exit with the planned renames if `--dry-run`
/// 4. Confirm with user unless `--yes` or `--quiet`
/// 5. Run the service, with a spinner on interactive terminals
/// 6. Print a summary
#[instrument(skip_all, fields(root = %args.directory.display()))]
pub async fn execute(
    args: RenameArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve configuration
    let naming = resolve_naming(&args, &config);
    let layout = ProjectLayout::new(&args.directory);

    debug!(
        file_style = %naming.file_naming_style,
        folder_style = %naming.folder_naming_style,
        use_setup_service = naming.use_setup_service,
        "Naming configuration resolved"
    );

    // 2. Layout check
    let service = NamingStyleService::new(Arc::new(LocalFilesystem::new()));
    service
        .check_layout(&layout, naming.use_setup_service)
        .await?;

    // 3. Dry run: plan but do not touch the project.
    if args.dry_run {
        let plans = service.preview(&layout, &naming).await?;
        return show_plans(&plans, &layout, &output);
    }

    // 4. Confirm
    if !global.quiet && !args.yes {
        show_configuration(&naming, &layout, &output)?;
        if !prompt::confirm(CONFIRM_QUESTION, false)? {
            return Err(CliError::Cancelled);
        }
    }

    // 5. Run
    info!(root = %layout.root().display(), "Rename started");
    let report = if output.format() == OutputFormat::Human && !output.is_quiet() {
        let spinner = Arc::new(SpinnerProgress::new(output.supports_color()));
        let result = service
            .with_progress(spinner.clone())
            .run(&layout, &naming)
            .await;
        spinner.finish();
        result?
    } else {
        service.run(&layout, &naming).await?
    };

    // 6. Summary
    show_report(&report, &layout, &output)
}

/// CLI flags win over every configuration source.
fn resolve_naming(args: &RenameArgs, config: &AppConfig) -> RenameConfiguration {
    RenameConfiguration {
        file_naming_style: args.file_style.unwrap_or(config.naming.file_naming_style),
        folder_naming_style: args
            .folder_style
            .unwrap_or(config.naming.folder_naming_style),
        use_setup_service: args
            .setup_service_override()
            .unwrap_or(config.naming.use_setup_service),
    }
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}

fn show_configuration(
    naming: &RenameConfiguration,
    layout: &ProjectLayout,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Project:      {}", layout.root().display()))?;
    out.print(&format!("  File style:   {}", naming.file_naming_style))?;
    out.print(&format!("  Folder style: {}", naming.folder_naming_style))?;
    out.print(&format!(
        "  Services:     {}",
        relative(&layout.service_dir(naming.use_setup_service), layout.root())
    ))?;
    out.print("")?;
    Ok(())
}

fn show_plans(plans: &[RenamePlan], layout: &ProjectLayout, out: &OutputManager) -> CliResult<()> {
    if out.is_json() {
        out.json(plans)?;
        return Ok(());
    }

    out.header("Planned renames")?;
    for plan in plans {
        let root = relative(plan.root(), layout.root());
        if plan.pending_count() == 0 {
            out.info(&format!("{root}: already conforms"))?;
            continue;
        }

        out.print(&format!("{root}:"))?;
        for item in plan.execution_order() {
            out.rename_line(
                &relative(&item.old_path, plan.root()),
                &relative(&item.new_path, plan.root()),
            )?;
        }
    }

    let total: usize = plans.iter().map(RenamePlan::pending_count).sum();
    out.info(&format!("Dry run: {total} entries would be renamed"))?;
    Ok(())
}

fn show_report(report: &RenameReport, layout: &ProjectLayout, out: &OutputManager) -> CliResult<()> {
    if out.is_json() {
        out.json(report)?;
        return Ok(());
    }

    if report.is_unchanged() {
        out.info("Project already follows the configured naming style")?;
        return Ok(());
    }

    out.success(&format!(
        "Renamed {} entries and updated imports in {} files",
        report.renamed_count(),
        report.rewritten_files.len()
    ))?;

    if out.is_verbose() {
        for subtree in &report.renamed {
            for item in &subtree.items {
                out.rename_line(
                    &relative(&item.old_path, layout.root()),
                    &relative(&item.new_path, layout.root()),
                )?;
            }
        }
        for file in &report.rewritten_files {
            out.print(&format!("  updated {}", relative(file, layout.root())))?;
        }
    }

    if report.router_updated {
        out.success("Router imports updated")?;
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
