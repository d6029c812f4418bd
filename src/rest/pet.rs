use ntex::web;

use crate::{api, rest::AppState};

#[web::get("")]
pub async fn list_pets(
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let pets = api::pet::list_pets(&app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&pets))
}

#[web::post("")]
pub async fn create_pet(
    body: web::types::Json<api::pet::CreatePetPayload>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let pet = api::pet::create_pet(body.into_inner(), &app_state.repo).await?;

    Ok(web::HttpResponse::Created().json(&pet))
}

#[web::get("/{pet_id}")]
pub async fn get_pet(
    path: web::types::Path<(i64,)>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let pet = api::pet::get_pet(path.0, &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&pet))
}

#[web::put("/{pet_id}")]
pub async fn update_pet(
    path: web::types::Path<(i64,)>,
    body: web::types::Json<api::pet::UpdatePetPayload>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let pet = api::pet::update_pet(path.0, body.into_inner(), &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&pet))
}

#[web::delete("/{pet_id}")]
pub async fn delete_pet(
    path: web::types::Path<(i64,)>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    api::pet::delete_pet(path.0, &app_state.repo).await?;

    Ok(web::HttpResponse::NoContent().finish())
}
