use crate::chart::{self, ChartConfig};
use crate::errors::AppError;
use crate::filters::{self, FilterCriteria};
use crate::models::{HoursQuery, UserListResponse, UsersQuery};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use chrono::Local;

/// Reporting page, preloaded with the project list, the first project's
/// users, and a default 30-day range.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let projects = state
        .backend
        .projects()
        .await
        .map_err(|err| AppError::upstream("project list", err))?;

    let users = match projects.first() {
        Some(project) => state
            .backend
            .project_users(&project.id)
            .await
            .map_err(|err| AppError::upstream("user list", err))?,
        None => Vec::new(),
    };

    let range = filters::default_range(Local::now().date_naive());
    Ok(Html(render_index(&projects, &users, &range)))
}

pub async fn project_hours(
    State(state): State<AppState>,
    Query(query): Query<HoursQuery>,
) -> Result<Json<ChartConfig>, AppError> {
    let criteria = FilterCriteria::from_query(query.project, &query.range, &query.users);
    let payload = state
        .backend
        .project_hours(&criteria)
        .await
        .map_err(|err| AppError::upstream("project hours", err))?;

    Ok(Json(chart::line_chart(payload)))
}

pub async fn project_users(
    State(state): State<AppState>,
    Query(query): Query<UsersQuery>,
) -> Result<Json<UserListResponse>, AppError> {
    let users = state
        .backend
        .project_users(&query.project)
        .await
        .map_err(|err| AppError::upstream("user list", err))?;

    Ok(Json(UserListResponse { users }))
}
