use colored::Colorize;
use kogen_core::{RouteTable, ROUTES_FILE};
use std::fs;
use std::path::Path;

/// One registered route, as listed by `kogen routes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRow {
    pub route: String,
    pub view: String,
    /// 1-based line of the entry in `routes.js`.
    pub line: usize,
}

/// Print every entry of the project's route table in file order.
pub fn run(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let rows = list(dir)?;

    if rows.is_empty() {
        println!("{}", "No routes found.".dimmed());
        return Ok(());
    }

    println!("{}", "Registered routes:".bold());
    println!();
    println!(
        "  {:<35} {:<25} {}",
        "ROUTE".dimmed(),
        "VIEW".dimmed(),
        "LINE".dimmed()
    );
    println!("  {}", "-".repeat(70).dimmed());

    for row in &rows {
        println!(
            "  {:<35} {:<25} {}:{}",
            row.route.green(),
            row.view,
            ROUTES_FILE,
            row.line
        );
    }

    println!();
    println!("  {} routes total", rows.len());

    Ok(())
}

/// Read and parse `routes.js` under `dir`.
pub fn list(dir: &Path) -> Result<Vec<RouteRow>, Box<dyn std::error::Error>> {
    let path = dir.join(ROUTES_FILE);
    if !path.is_file() {
        return Err(format!("{} not found in {}", ROUTES_FILE, dir.display()).into());
    }

    let table = RouteTable::parse(fs::read_to_string(&path)?)?;
    let source = table.source();

    Ok(table
        .entries()
        .iter()
        .map(|entry| RouteRow {
            route: entry.route.clone(),
            view: entry.view.clone(),
            line: source[..entry.span.start].matches('\n').count() + 1,
        })
        .collect())
}
