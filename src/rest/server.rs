use ntex::web;
use serde_json::json;

#[web::get("/")]
pub async fn index() -> impl web::Responder {
    web::HttpResponse::Ok().json(&json!({
        "service": "pet-care-api",
        "status": "ok",
    }))
}
