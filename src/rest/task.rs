use ntex::web;

use crate::{api, rest::AppState};

#[web::get("")]
pub async fn list_tasks(
    query: web::types::Query<api::task::TaskListQuery>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let tasks = api::task::list_tasks(query.into_inner(), &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&tasks))
}

#[web::post("")]
pub async fn create_task(
    body: web::types::Json<api::task::CreateTaskPayload>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let task = api::task::create_task(body.into_inner(), &app_state.repo).await?;

    Ok(web::HttpResponse::Created().json(&task))
}

#[web::get("/{task_id}")]
pub async fn get_task(
    path: web::types::Path<(i64,)>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let task = api::task::get_task(path.0, &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&task))
}

#[web::put("/{task_id}")]
pub async fn update_task(
    path: web::types::Path<(i64,)>,
    body: web::types::Json<api::task::UpdateTaskPayload>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let task = api::task::update_task(path.0, body.into_inner(), &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&task))
}

#[web::delete("/{task_id}")]
pub async fn delete_task(
    path: web::types::Path<(i64,)>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    api::task::delete_task(path.0, &app_state.repo).await?;

    Ok(web::HttpResponse::NoContent().finish())
}

#[web::patch("/{task_id}/status")]
pub async fn set_task_status(
    path: web::types::Path<(i64,)>,
    body: web::types::Json<api::task::StatusPayload>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let task = api::task::set_task_status(path.0, body.into_inner(), &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&task))
}
