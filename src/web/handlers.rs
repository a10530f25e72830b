use actix_web::{web, HttpResponse, Responder};
use log::{error, info};
use serde_json::json;
use tera::Context;

use crate::assistant::{GREETING, QUICK_REPLIES};
use crate::catalog::{CAR_MODELS, DEALERSHIP};
use crate::web::models::{ChatbotRequest, ChatbotResponse};
use crate::web::AppState;

/// Returned by the endpoint itself when the model fails, so the widget gets
/// a displayable answer instead of an error status.
pub const SERVER_APOLOGY: &str = "I'm sorry, I encountered an error and couldn't process your request. Please try again later.";

// Landing page handler
pub async fn index(data: web::Data<AppState>) -> impl Responder {
    let mut context = Context::new();
    context.insert("dealership", &DEALERSHIP);
    context.insert("car_models", CAR_MODELS);
    context.insert("greeting", GREETING);
    context.insert("quick_replies", &QUICK_REPLIES);

    match data.tera.render("index.html", &context) {
        Ok(html) => HttpResponse::Ok().content_type("text/html").body(html),
        Err(e) => {
            error!("Template error: {}", e);
            HttpResponse::InternalServerError().body("Template error")
        }
    }
}

// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

// Answering service endpoint used by the assistant widget
pub async fn chatbot(
    data: web::Data<AppState>,
    req: web::Json<ChatbotRequest>,
) -> impl Responder {
    let query = req.query.trim();
    if query.is_empty() {
        return HttpResponse::BadRequest().json(json!({
            "error": "query must not be empty"
        }));
    }

    info!("Chatbot query: {}", query);

    let answer = match data.model.model.ask(query).await {
        Ok(answer) => answer,
        Err(e) => {
            error!("Error in chatbot assistant: {}", e);
            SERVER_APOLOGY.to_string()
        }
    };

    HttpResponse::Ok().json(ChatbotResponse { answer })
}
