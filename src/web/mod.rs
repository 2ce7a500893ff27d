mod handlers;
mod state;

use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::config::ScenarioConfig;
use state::AppState;

pub async fn start_server(port: u16, defaults: ScenarioConfig) -> std::io::Result<()> {
    let data = web::Data::new(AppState::new(defaults));

    println!("Starting CSTR Profit Optimizer web server on http://localhost:{port}");
    tracing::info!(port, "web server starting");

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(data.clone())
            // Static files
            .route("/", web::get().to(handlers::index_html))
            .route("/app.js", web::get().to(handlers::app_js))
            // API routes
            .route("/api/defaults", web::get().to(handlers::defaults))
            .route("/api/optimize", web::post().to(handlers::optimize))
            .route("/api/evaluate", web::post().to(handlers::evaluate))
            .route("/api/sweep", web::post().to(handlers::sweep))
    })
    .bind(("127.0.0.1", port))?
    .run()
    .await
}
