pub mod errors;
pub mod pet;
pub mod routes;
pub mod server;
pub mod task;

use crate::repo;

pub struct AppState {
    pub repo: repo::ImplAppRepo,
}
