//! 作品集静态内容接口

use crate::models::common::ApiMessage;
use crate::models::err::AppError;
use crate::models::portfolio::{AboutReply, ProjectListReply, ProjectQuery, ProjectReply, SkillsReply};
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::Json;

/// 作品列表
#[utoipa::path(get,
    path = "/portfolio",
    tag = "portfolio",
    params(ProjectQuery),
    responses(
        (status = 200, description = "Projects", body = ProjectListReply)
    )
)]
pub async fn list_projects(State(state): State<AppState>, Query(query): Query<ProjectQuery>) -> Json<ProjectListReply> {
    Json(ProjectListReply {
        success: true,
        projects: state.portfolio.projects(query.category.as_deref()),
    })
}

/// 作品详情
#[utoipa::path(get,
    path = "/portfolio/{id}",
    tag = "portfolio",
    params(("id" = String, Path, description = "Project id")),
    responses(
        (status = 200, description = "The project", body = ProjectReply),
        (status = 404, description = "Project not found", body = ApiMessage)
    )
)]
pub async fn get_project(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<ProjectReply>, AppError> {
    let project = state
        .portfolio
        .project(&id)
        .cloned()
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

    Ok(Json(ProjectReply { success: true, project }))
}

/// 技能列表
#[utoipa::path(get,
    path = "/skills",
    tag = "portfolio",
    responses(
        (status = 200, description = "Skills grouped by area", body = SkillsReply)
    )
)]
pub async fn get_skills(State(state): State<AppState>) -> Json<SkillsReply> {
    Json(SkillsReply {
        success: true,
        skills: state.portfolio.skills().clone(),
    })
}

/// 个人简介
#[utoipa::path(get,
    path = "/about",
    tag = "portfolio",
    responses(
        (status = 200, description = "About the site owner", body = AboutReply)
    )
)]
pub async fn get_about(State(state): State<AppState>) -> Json<AboutReply> {
    Json(AboutReply {
        success: true,
        about: state.portfolio.about().clone(),
    })
}
