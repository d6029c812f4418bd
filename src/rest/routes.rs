//! HTTP route configuration.
//!
//! Routes are grouped into one scope per resource.

use super::{pet, task};
use ntex::web;

/// Configures pet resource routes.
///
/// # Routes
/// - `GET /api/pets` - list pets
/// - `POST /api/pets` - create pet
/// - `GET /api/pets/{pet_id}` - fetch pet
/// - `PUT /api/pets/{pet_id}` - update pet (partial merge)
/// - `DELETE /api/pets/{pet_id}` - delete pet and its tasks
pub fn pets(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/pets").service((
        pet::list_pets,
        pet::create_pet,
        pet::get_pet,
        pet::update_pet,
        pet::delete_pet,
    )));
}

/// Configures task resource routes.
///
/// # Routes
/// - `GET /api/tasks?from=&to=` - list tasks, optional inclusive range filter
/// - `POST /api/tasks` - create task
/// - `GET /api/tasks/{task_id}` - fetch task
/// - `PUT /api/tasks/{task_id}` - update task (partial merge)
/// - `DELETE /api/tasks/{task_id}` - delete task
/// - `PATCH /api/tasks/{task_id}/status` - set task status
pub fn tasks(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/tasks").service((
        task::list_tasks,
        task::create_task,
        task::set_task_status,
        task::get_task,
        task::update_task,
        task::delete_task,
    )));
}
