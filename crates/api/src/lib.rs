mod error;
mod job_schedulers;
mod reminder;
mod shared;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware, web, App, HttpResponse, HttpServer};
pub use error::NudgeError;
pub use job_schedulers::send_reminders;
use job_schedulers::start_send_reminders_job;
use nudge_api_structs::get_service_health;
use nudge_infra::NudgeContext;
pub use reminder::DeliveryReport;
use reminder::ReminderApiDoc;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

async fn status() -> HttpResponse {
    HttpResponse::Ok().json(get_service_health::APIResponse::healthy())
}

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    reminder::configure_routes(cfg);
    cfg.route("/", web::get().to(status));
    cfg.service(
        SwaggerUi::new("/swagger/{_:.*}").url("/api-docs/openapi.json", ReminderApiDoc::openapi()),
    );
}

/// Malformed json bodies are answered like every other bad request
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| NudgeError::BadClientData(err.to_string()).into())
}

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    pub async fn new(context: NudgeContext) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context.clone()).await?;
        Application::start_job_schedulers(context);

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    fn start_job_schedulers(context: NudgeContext) {
        start_send_reminders_job(context);
    }

    async fn configure_server(context: NudgeContext) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();

        let server = HttpServer::new(move || {
            let ctx = context.clone();

            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(ctx))
                .app_data(json_config())
                .configure(configure_server_api)
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
