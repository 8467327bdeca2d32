use super::constants::ALL_CATEGORIES;
use super::content::Project;

/// Category bar entries: the "All" sentinel, then each category once in the
/// order it first appears in `projects`.
pub fn categories(projects: &[Project]) -> Vec<&str> {
    let mut out: Vec<&str> = vec![ALL_CATEGORIES];
    for p in projects {
        if !out.contains(&p.category) {
            out.push(p.category);
        }
    }
    out
}

/// Projects visible under `selected`, in their configured order.
pub fn filter_projects<'a>(projects: &'a [Project], selected: &str) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|p| selected == ALL_CATEGORIES || p.category == selected)
        .collect()
}

/// Selected category of the Projects panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectFilter {
    selected: String,
}

impl Default for ProjectFilter {
    fn default() -> Self {
        Self {
            selected: ALL_CATEGORIES.to_string(),
        }
    }
}

impl ProjectFilter {
    #[inline]
    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// Returns true when the selection changed.
    pub fn select(&mut self, category: &str) -> bool {
        if self.selected == category {
            return false;
        }
        self.selected = category.to_string();
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        filter_projects(projects, &self.selected)
    }
}
