pub mod client;
pub mod handlers;
pub mod models;
pub mod routes;

use actix_web::web::Data;
use tera::Tera;

use crate::model::ModelManager;

// Shared state handed to every handler
pub struct AppState {
    pub tera: Tera,
    pub model: Data<ModelManager>,
}
