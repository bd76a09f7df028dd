//! Dashboard statistics shown on the admin view.

use serde::Serialize;

/// Number of jobs in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub value: usize,
}

/// Summary of the job collection at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total: usize,
    pub posted_today: usize,
    pub expired: usize,
    pub by_category: Vec<CategoryCount>,
}
