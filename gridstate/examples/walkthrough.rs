//! Walkthrough example - a job-listings grid driven headlessly
//!
//! This example builds a grid over a small set of job listings and walks
//! through the main interactions: paging, sorting, filtering, selection
//! and drag reordering. Diagnostics land in walkthrough.log.

use std::fs::File;

use gridstate::prelude::*;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

// =============================================================================
// Data types
// =============================================================================

/// A listing from our "API"
#[derive(Debug, Clone)]
struct Listing {
    slug: String,
    company: String,
    position: String,
    applicants: f64,
    open: bool,
}

impl GridRow for Listing {
    fn id(&self) -> Option<String> {
        Some(self.slug.clone())
    }
}

// =============================================================================
// Simulated API
// =============================================================================

fn fetch_listings() -> Vec<Listing> {
    let raw = [
        ("acme-backend", "Acme", "Backend Intern", 42.0, true),
        ("globex-frontend", "Globex", "Frontend Intern", 85.0, true),
        ("initech-data", "Initech", "Data Intern", 17.0, false),
        ("umbrella-devops", "Umbrella", "DevOps Intern", 63.0, true),
        ("hooli-mobile", "Hooli", "Mobile Intern", 29.0, true),
        ("stark-embedded", "Stark", "Embedded Intern", 51.0, false),
        ("wayne-security", "Wayne", "Security Intern", 74.0, true),
    ];
    raw.iter()
        .map(|(slug, company, position, applicants, open)| Listing {
            slug: slug.to_string(),
            company: company.to_string(),
            position: position.to_string(),
            applicants: *applicants,
            open: *open,
        })
        .collect()
}

fn columns() -> Vec<Column<Listing>> {
    vec![
        Column::new("company", "Company")
            .accessor(|l: &Listing| l.company.clone().into())
            .sortable(),
        Column::new("position", "Position")
            .accessor(|l: &Listing| l.position.clone().into())
            .sortable()
            .flex(2),
        Column::new("applicants", "Applicants")
            .accessor(|l: &Listing| l.applicants.into())
            .sortable()
            .fixed(10),
        Column::new("open", "Open")
            .accessor(|l: &Listing| l.open.into())
            .no_export(),
    ]
}

// =============================================================================
// Rendering
// =============================================================================

fn print_page(grid: &Grid<Listing>, label: &str) {
    let view = grid.page_view();
    println!(
        "-- {} (page {}/{}, {} matching) --",
        label,
        view.page_index + 1,
        view.page_count,
        view.filtered_len
    );
    let columns = grid.ordered_columns();
    for (row, id) in view.rows.iter().zip(&view.ids) {
        let marker = if grid.is_selected(id) { "*" } else { " " };
        let cells: Vec<String> = columns
            .iter()
            .filter(|c| !c.is_structural())
            .map(|c| c.value(row).to_string())
            .collect();
        println!(" {} {}", marker, cells.join(" | "));
    }
    println!();
}

// =============================================================================
// Main
// =============================================================================

fn main() {
    // Initialize file logging
    if let Ok(log_file) = File::create("walkthrough.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let grid = Grid::new(columns())
        .with_flags(FeatureFlags {
            selection: true,
            column_reorder: true,
            row_reorder: true,
            ..Default::default()
        })
        .with_page_size(3)
        .with_rows(fetch_listings());

    print_page(&grid, "initial");

    grid.next_page();
    print_page(&grid, "next page");
    grid.prev_page();

    grid.toggle_sort("applicants");
    grid.toggle_sort("applicants");
    print_page(&grid, "most applicants first");

    grid.set_filter("open", FilterSpec::Equals("true".to_string()));
    grid.set_filter("position", FilterSpec::Contains("intern".to_string()));
    print_page(&grid, "open internships");

    grid.toggle_select("globex-frontend");
    grid.select_all_page();
    println!("selected: {:?}", grid.selected_ids());
    println!("page selection: {:?}\n", grid.page_selection());

    grid.clear_filters();
    grid.toggle_sort("applicants"); // back to unsorted

    // A pointer gesture: pick up the first listing, drop it on the third.
    grid.on_drag(DragEvent::Start("acme-backend".to_string()));
    grid.on_drag(DragEvent::End {
        active: "acme-backend".to_string(),
        over: "initech-data".to_string(),
    });
    print_page(&grid, "after row drag");

    // A keyboard gesture: move the applicants column left twice.
    grid.nudge("applicants", -2);
    println!("column order: {:?}", grid.column_order());

    let snapshot = grid.snapshot();
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("\nsnapshot:\n{}", json),
        Err(e) => eprintln!("Error: {}", e),
    }
}
