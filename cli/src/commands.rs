//! REPL command handlers.

use std::io::Write;
use std::path::Path;

use alehp_core::dataset::workbook;
use alehp_core::{FilterCriteria, build_table, render, write_table};

use crate::CliContext;
use crate::render::print_layout;

/// Run the offline dataset build: workbook -> canonical CSV.
///
/// Never runs concurrently with query serving; the freshly built table
/// replaces the in-memory one so the next `show` uses it.
pub fn build_dataset(
    ctx: &mut CliContext,
    workbook_path: Option<&str>,
    out: Option<&str>,
) -> Result<(), String> {
    let workbook_path = workbook_path.unwrap_or(&ctx.config.workbook_path);
    let out = out.unwrap_or(&ctx.config.dataset_path);

    let (stats, details) = workbook::load_sheets(
        Path::new(workbook_path),
        &ctx.config.stats_sheet,
        &ctx.config.details_sheet,
    )
    .map_err(|e| format!("build failed: {e}"))?;

    let table = build_table(&stats, &details).map_err(|e| format!("build failed: {e}"))?;
    write_table(Path::new(out), &table).map_err(|e| format!("build failed: {e}"))?;

    println!("built canonical table: {} units -> {out}", table.len());
    ctx.set_table(table);
    Ok(())
}

/// Set the armor selector and re-render. "All" clears the predicate.
pub fn set_armor(ctx: &mut CliContext, value: &str) -> Result<(), String> {
    let armor = if value.eq_ignore_ascii_case("all") {
        None
    } else {
        match ctx.style.canonical_armor(value) {
            Some(c) => Some(c.to_string()),
            None => {
                return Err(format!(
                    "unknown armor class '{value}' (expected All, {})",
                    ctx.style.armor_classes().join(", ")
                ));
            }
        }
    };
    ctx.criteria.armor = armor;
    show_chart(ctx)
}

/// Set the hull selector and re-render. "All" clears the predicate.
pub fn set_hull(ctx: &mut CliContext, value: &str) -> Result<(), String> {
    let hull = if value.eq_ignore_ascii_case("all") {
        None
    } else {
        match ctx.style.canonical_hull(value) {
            Some(c) => Some(c.to_string()),
            None => {
                return Err(format!(
                    "unknown hull class '{value}' (expected All, {})",
                    ctx.style.hull_classes().join(", ")
                ));
            }
        }
    };
    ctx.criteria.hull = hull;
    show_chart(ctx)
}

/// Re-run the query & layout engine with the current selectors and print.
pub fn show_chart(ctx: &mut CliContext) -> Result<(), String> {
    let criteria = ctx.criteria.clone();
    let style = ctx.style.clone();
    let table = ctx.table()?;

    let layout = render(table, &criteria, &style).map_err(|e| e.to_string())?;
    print_layout(&layout);
    Ok(())
}

pub fn show_settings(ctx: &CliContext) {
    println!("workbook_path: {}", ctx.config.workbook_path);
    println!("stats_sheet:   {}", ctx.config.stats_sheet);
    println!("details_sheet: {}", ctx.config.details_sheet);
    println!("dataset_path:  {}", ctx.config.dataset_path);
    println!("armor filter:  {}", selector_display(&ctx.criteria, true));
    println!("hull filter:   {}", selector_display(&ctx.criteria, false));
}

fn selector_display(criteria: &FilterCriteria, armor: bool) -> String {
    let value = if armor { &criteria.armor } else { &criteria.hull };
    value.clone().unwrap_or_else(|| "All".to_string())
}

pub fn exit() {
    write!(std::io::stdout(), "quitting...").ok();
    std::io::stdout().flush().ok();
}
