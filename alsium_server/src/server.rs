use std::time::Duration;

use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use alsium_engine::{helpers::PaymentVerifier, LedgerApi, LedgerStore, OrderFlowApi, OrderGateway};
use log::*;
use razorpay_tools::RazorpayApi;
use sheets_tools::SheetsApi;

use crate::{
    config::{CheckoutOptions, ServerConfig},
    errors::ServerError,
    routes::{health, index, int_sheet, payment, CreateOrderRoute, VerifyPaymentRoute},
};

/// Connects to both upstream services and runs the server until it is shut down.
///
/// The ledger spreadsheet is looked up once, here. If it cannot be found (or the credentials are bad), the server does
/// not start.
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    if config.razorpay.key_id.is_empty() || config.razorpay.key_secret.is_empty() {
        warn!(
            "🪛️ RAZORPAY_KEY_ID or RAZORPAY_KEY_SECRET is not set. Orders cannot be created and every payment will \
             fail verification."
        );
    }
    let gateway = RazorpayApi::new(config.razorpay.clone()).map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let sheets = SheetsApi::new(config.sheets.clone()).map_err(|e| ServerError::InitializeError(e.to_string()))?;
    info!("📒️ Using service account {}", sheets.service_account());
    let ledger = sheets
        .open_first_worksheet(&config.sheets.sheet_name)
        .await
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let srv = create_server_instance(config, gateway, ledger)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

pub fn create_server_instance<G, L>(config: ServerConfig, gateway: G, ledger: L) -> Result<Server, ServerError>
where
    G: OrderGateway + Clone + Send + 'static,
    L: LedgerStore + Clone + Send + 'static,
{
    let checkout = CheckoutOptions::from_config(&config);
    let verifier = PaymentVerifier::new(config.razorpay.key_secret.clone());
    let srv = HttpServer::new(move || {
        let orders_api = OrderFlowApi::new(gateway.clone());
        let ledger_api = LedgerApi::new(ledger.clone());
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("alsium::access_log"))
            .app_data(web::Data::new(orders_api))
            .app_data(web::Data::new(ledger_api))
            .app_data(web::Data::new(checkout.clone()))
            .app_data(web::Data::new(verifier.clone()))
            .configure(configure_routes::<G, L>)
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}

/// Registers every route. Application data (the two APIs, the checkout options and the payment verifier) must be
/// supplied by the caller.
pub fn configure_routes<G, L>(cfg: &mut web::ServiceConfig)
where
    G: OrderGateway + 'static,
    L: LedgerStore + 'static,
{
    cfg.service(health)
        .service(index)
        .service(payment)
        .service(int_sheet)
        .service(CreateOrderRoute::<G>::new())
        .service(VerifyPaymentRoute::<L>::new());
}
