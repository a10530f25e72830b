use actix_web::{App, HttpServer, web::Data};
use actix_files as fs;
use dotenv::dotenv;
use log::{info, error};
use tera::Tera;

use sai_motors::config::Settings;
use sai_motors::model::ModelManager;
use sai_motors::web::{routes, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Sai Motors assistant server");

    let settings = Settings::from_env();

    // Initialize the answering model (connection to the chat completions server)
    let model_manager = match ModelManager::new(&settings) {
        Ok(manager) => {
            info!("Assistant model initialized");
            Data::new(manager)
        },
        Err(e) => {
            error!("Failed to initialize assistant model: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize template engine
    let mut tera = match Tera::new("templates/**/*") {
        Ok(t) => t,
        Err(e) => {
            error!("Template parsing error: {}", e);
            std::process::exit(1);
        }
    };
    tera.autoescape_on(vec![".html"]);

    let app_state = Data::new(AppState {
        tera,
        model: model_manager,
    });

    info!("Listening on {}:{}", settings.bind_addr, settings.port);

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .configure(routes::configure)
            .service(fs::Files::new("/static", "./static"))
    })
    .bind((settings.bind_addr.as_str(), settings.port))?
    .run()
    .await
}
