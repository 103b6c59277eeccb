use std::cmp::Ordering;

use crate::modules::projects::core::project::Project;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Anything but a case-insensitive `desc` sorts ascending.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if value.eq_ignore_ascii_case("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectSortKey {
    Name,
    CreatedAt,
    UpdatedAt,
}

impl ProjectSortKey {
    /// `None` for keys the listing does not know; callers keep the input order.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "name" => Some(ProjectSortKey::Name),
            "created_at" | "create_on" => Some(ProjectSortKey::CreatedAt),
            "updated_at" | "update_on" => Some(ProjectSortKey::UpdatedAt),
            _ => None,
        }
    }

    fn compare(self, a: &Project, b: &Project) -> Ordering {
        match self {
            ProjectSortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            ProjectSortKey::CreatedAt => a.created_at.cmp(&b.created_at),
            ProjectSortKey::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        }
    }
}

/// Stable sort: equal keys keep their relative order in both directions.
pub fn sort_projects(projects: &mut [Project], key: ProjectSortKey, order: SortOrder) {
    projects.sort_by(|a, b| order.apply(key.compare(a, b)));
}
