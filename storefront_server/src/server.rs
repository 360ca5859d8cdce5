use std::time::Duration;

use actix_cors::Cors;
use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use printful_tools::PrintfulApi;
use stripe_tools::StripeApi;

use crate::{config::ServerConfig, errors::ServerError, reconciliation::FulfillmentOutbox, routes};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let stripe = StripeApi::new(config.stripe.clone()).map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let printful = PrintfulApi::new(config.printful.clone()).map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let outbox = FulfillmentOutbox::new(&config.outbox_path);
    let srv = create_server_instance(config, stripe, printful, outbox)?;
    srv.await.map_err(ServerError::from)
}

pub fn create_server_instance(
    config: ServerConfig,
    stripe: StripeApi,
    printful: PrintfulApi,
    outbox: FulfillmentOutbox,
) -> Result<Server, ServerError> {
    let srv = HttpServer::new(move || {
        // The storefront is served from a different origin, so the API surface is CORS-open.
        let cors = Cors::permissive();
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("sfs::access_log"))
            .wrap(cors)
            .app_data(web::Data::new(stripe.clone()))
            .app_data(web::Data::new(printful.clone()))
            .app_data(web::Data::new(outbox.clone()))
            .route("/health", web::get().to(routes::health))
            .service(
                web::scope("/api")
                    .route("/products", web::get().to(routes::products::<PrintfulApi>))
                    .route("/product", web::get().to(routes::product::<PrintfulApi>))
                    .route("/create-checkout-session", web::post().to(routes::create_checkout_session::<StripeApi>))
                    .route("/payment-success", web::post().to(routes::payment_success::<StripeApi, PrintfulApi>))
                    .route("/order", web::post().to(routes::direct_order::<PrintfulApi>))
                    .route("/webhook", web::post().to(routes::webhook)),
            )
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}
