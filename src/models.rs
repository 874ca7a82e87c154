use serde::{Deserialize, Serialize};

/// Aggregated hours for one project over a date range, as the time
/// tracking backend reports them. `series[i].data` is aligned
/// positionally with `weeks`; the backend guarantees the lengths match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartPayload {
    pub weeks: Vec<String>,
    pub series: Vec<Series>,
}

/// One user's weekly hour totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub data: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectUser {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectListResponse {
    pub projects: Vec<Project>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserListResponse {
    pub users: Vec<ProjectUser>,
}

/// Query string for `/api/project_hours`. The page sends the date range
/// control's raw value and the checked user ids joined with commas.
#[derive(Debug, Deserialize)]
pub struct HoursQuery {
    pub project: String,
    pub range: String,
    #[serde(default)]
    pub users: String,
}

#[derive(Debug, Deserialize)]
pub struct UsersQuery {
    pub project: String,
}
