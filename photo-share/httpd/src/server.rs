use {
    super::error::Error,
    crate::{
        config::HttpdConfig,
        context::Context,
        graphql::{build_schema, AppSchema},
        routes,
    },
    actix_cors::Cors,
    actix_web::{
        http,
        middleware::{Compress, Logger},
        web::{self, ServiceConfig},
        App, HttpResponse, HttpServer,
    },
    sentry_actix::Sentry,
};

pub fn config_app(app_ctx: Context, graphql_schema: AppSchema) -> Box<dyn Fn(&mut ServiceConfig)> {
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.service(routes::index::index)
            .service(routes::graphql::graphql_route())
            .service(routes::graphql::playground)
            .default_service(web::to(HttpResponse::NotFound))
            .app_data(web::Data::new(app_ctx.clone()))
            .app_data(web::Data::new(graphql_schema.clone()));
    })
}

/// CORS policy for browser clients. Origins come from the comma separated
/// `cors_allowed_origin`, any origin is allowed when it is unset.
pub fn cors(config: &HttpdConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["POST", "GET", "OPTIONS"])
        .allowed_headers(vec![
            http::header::AUTHORIZATION,
            http::header::ACCEPT,
            http::header::CONTENT_TYPE,
        ])
        .max_age(3600);

    if let Some(origin) = config.cors_allowed_origin.as_deref() {
        for origin in origin.split(',') {
            cors = cors.allowed_origin(origin.trim());
        }
    } else {
        cors = cors.allow_any_origin();
    }

    cors
}

/// Run the HTTP server serving the GraphQL API and its explorers.
pub async fn run_server(config: &HttpdConfig, app_ctx: Context) -> Result<(), Error> {
    let graphql_schema = build_schema(app_ctx.clone());
    let httpd_config = config.clone();

    tracing::info!(ip = %config.ip, port = config.port, "Starting photo-share httpd server");

    HttpServer::new(move || {
        App::new()
            .wrap(Sentry::new())
            .wrap(Logger::default())
            .wrap(Compress::default())
            .wrap(cors(&httpd_config))
            .configure(config_app(app_ctx.clone(), graphql_schema.clone()))
    })
    .bind((config.ip.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
