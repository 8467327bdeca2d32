// Host-side tests for the project catalogue and category filter.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod content {
        include!("../src/core/content.rs");
    }
    pub mod projects {
        include!("../src/core/projects.rs");
    }
}

use crate::core::content::{Project, CONTENT, PROJECTS};
use crate::core::projects::*;

fn ids(list: &[&Project]) -> Vec<&'static str> {
    list.iter().map(|p| p.id).collect()
}

#[test]
fn categories_start_with_all_then_first_seen_order() {
    assert_eq!(categories(&PROJECTS), vec!["All", "Website", "App", "Design"]);
}

#[test]
fn categories_of_empty_catalogue_is_just_all() {
    assert_eq!(categories(&[]), vec!["All"]);
}

#[test]
fn all_keeps_every_project_in_order() {
    assert_eq!(ids(&filter_projects(&PROJECTS, "All")), vec!["p1", "p2", "p3", "p4"]);
}

#[test]
fn website_filter_keeps_configured_order() {
    assert_eq!(ids(&filter_projects(&PROJECTS, "Website")), vec!["p1", "p4"]);
}

#[test]
fn unknown_category_is_empty() {
    assert!(filter_projects(&PROJECTS, "Hardware").is_empty());
}

#[test]
fn filter_select_reports_changes() {
    let mut f = ProjectFilter::default();
    assert_eq!(f.selected(), "All");
    assert!(!f.select("All"));
    assert!(f.select("Design"));
    assert_eq!(ids(&f.apply(CONTENT.projects)), vec!["p3"]);
    f.reset();
    assert_eq!(f, ProjectFilter::default());
}

#[test]
fn years_of_experience_never_negative() {
    assert_eq!(CONTENT.stats.years_experience(2026), 4);
    assert_eq!(CONTENT.stats.years_experience(2000), 0);
}
