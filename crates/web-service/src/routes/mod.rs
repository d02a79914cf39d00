//! 路由入口
//!
//! 提供 [`create_app_router`] 函数，导出当前App的所有路由。
//!
//! 用户可以在导出路由时传入共享数据 shared_state，这样所有路由函数都可以访问。

use crate::routes::admin::__path_admin_approve_review;
use crate::routes::admin::__path_admin_delete_review;
use crate::routes::admin::__path_admin_get_review;
use crate::routes::admin::__path_admin_list_reviews;
use crate::routes::admin::{admin_approve_review, admin_delete_review, admin_get_review, admin_list_reviews};
use crate::routes::contact::__path_send_contact;
use crate::routes::contact::send_contact;
use crate::routes::health::__path_health_check;
use crate::routes::health::health_check;
use crate::routes::portfolio::__path_get_about;
use crate::routes::portfolio::__path_get_project;
use crate::routes::portfolio::__path_get_skills;
use crate::routes::portfolio::__path_list_projects;
use crate::routes::portfolio::{get_about, get_project, get_skills, list_projects};
use crate::routes::reviews::__path_list_approved_reviews;
use crate::routes::reviews::__path_submit_review;
use crate::routes::reviews::{list_approved_reviews, submit_review};
use crate::models::err::AppError;
use crate::AppState;
use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_scalar::{Scalar, Servable};

pub mod admin;
pub mod contact;
pub mod health;
pub mod portfolio;
pub mod reviews;

/// 导出当前App的所有路由
///
/// ## 参数定义
/// - state: 共享数据，参考 [`AppState`] 定义。
///
/// ## **❗️注意事项：**
///
/// [`routes!`] 宏里面的接口必须是同一个路径，不同路径需要拆开定义：
///
/// ```rust,ignore
/// .routes(routes!(admin_get_review, admin_delete_review))
/// .routes(routes!(admin_approve_review))
/// ```
fn routers(state: AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(submit_review))
        .routes(routes!(list_approved_reviews))
        .routes(routes!(admin_list_reviews))
        .routes(routes!(admin_get_review, admin_delete_review))
        .routes(routes!(admin_approve_review))
        .routes(routes!(send_contact))
        .routes(routes!(list_projects))
        .routes(routes!(get_project))
        .routes(routes!(get_skills))
        .routes(routes!(get_about))
        .routes(routes!(health_check))
        .with_state(state)
}

/// 创建当前App的路由
///
/// 完成以下功能：
/// - 生成OpenAPI文档
/// - 生成App路由（统一挂载在 `/api` 下）
/// - 使用Scalar作为最终在线文档格式
///
/// 由于使用了 `utoipa` 库来自动化生成`openapi`文档，因此我们没有使用原生的 [`Router`]，而是使用了
/// [`OpenApiRouter`] 。
pub fn create_app_router(shared_state: AppState) -> Router {
    // 当前项目的OpenAPI声明
    #[derive(OpenApi)]
    #[openapi(
        tags(
            (name = "reviews", description = "评价提交与公开展示"),
            (name = "admin", description = "评价审核管理，需要管理口令"),
            (name = "contact", description = "联系表单"),
            (name = "portfolio", description = "作品集静态内容"),
            (name = "health", description = "健康检查")
        ),
    )]
    struct ApiDoc;

    // 使用`utoipa_axum`提供的OpenApiRouter来创建路由。
    // 最终拿到的变量：
    // - router: Axum的Router，实际的路由对象
    // - api: utoipa的OpenApi，生成的OpenAPI对象
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api", routers(shared_state))
        .split_for_parts();

    // 合并文档路由，用户可通过 /docs 访问文档网页地址
    // 未知路径和不支持的请求方法也返回统一的json错误格式
    router
        .merge(Scalar::with_url("/docs", api))
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
}

async fn route_not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
