//! Request handler definitions
//!
//! Parsing and validation live in [`crate::data_objects`], business logic in `alsium_engine`. Handlers only glue the
//! two together and map errors to responses.
//!
//! Both upstream services (the payment gateway and the ledger) are called through async clients, so a slow upstream
//! only parks the request that is waiting on it, not the worker.
use actix_web::{get, http::header::ContentType, web, HttpResponse, Responder};
use alsium_engine::{helpers::PaymentVerifier, LedgerApi, LedgerRow, LedgerStore, OrderFlowApi, OrderGateway};
use log::*;

use crate::{
    config::CheckoutOptions,
    data_objects::{
        parse_body,
        CreateOrderRequest,
        CreateOrderResponse,
        VerifyPaymentRequest,
        VerifyPaymentResponse,
        PAYMENT_VERIFIED_STATUS,
    },
    errors::ServerError,
    pages,
};

// Web-actix cannot handle generics in handlers, so it's implemented manually using the `route!` macro
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+) => {
        paste::paste! { pub struct [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ >( $( core::marker::PhantomData<fn() -> [< T $bounds:camel> ] >,)+ );}
        paste::paste! { impl< $( [< T $bounds:camel> ],)+ > [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ > {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self($( core::marker::PhantomData::<fn() -> [< T $bounds:camel> ] >,)+)
            }
        }}
        paste::paste! { impl<$( [< T $bounds:camel >] , )+> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<$([<T $bounds:camel>],)+>
        where
            $([<T $bounds:camel>]: $bounds + 'static,)+
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::< $( [< T $bounds:camel >], )+>);
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

//----------------------------------------------   Pages  ----------------------------------------------------
#[get("/")]
pub async fn index() -> impl Responder {
    trace!("💻️ GET index");
    HttpResponse::Ok().insert_header(ContentType::html()).body(pages::index_page())
}

/// The payment page. The gateway's public key id is embedded so that the checkout widget can be opened from the page.
#[get("/payment")]
pub async fn payment(checkout: web::Data<CheckoutOptions>) -> impl Responder {
    trace!("💻️ GET payment");
    HttpResponse::Ok().insert_header(ContentType::html()).body(pages::payment_page(&checkout.razorpay_key_id))
}

#[get("/int_sheet")]
pub async fn int_sheet() -> impl Responder {
    trace!("💻️ GET int_sheet");
    HttpResponse::Ok().insert_header(ContentType::html()).body(pages::int_sheet_page())
}

//----------------------------------------------   Orders  ----------------------------------------------------
route!(create_order => Post "/create_order" impl OrderGateway);
/// Route handler for the create_order endpoint
///
/// Creates an order at the payment gateway. The JSON body is optional:
/// * `amount` - in paise. Defaults to 1200 (₹12.00).
/// * `user_id` - only used to build the order's receipt reference. Defaults to `guest`.
///
/// The response carries everything the checkout widget needs: `order_id`, `amount`, `currency` and the public `key`.
/// Gateway failures are reported as a 500 with the gateway's message.
pub async fn create_order<B: OrderGateway>(
    body: web::Bytes,
    api: web::Data<OrderFlowApi<B>>,
    checkout: web::Data<CheckoutOptions>,
) -> Result<HttpResponse, ServerError> {
    let request = parse_body::<CreateOrderRequest>(&body).map_err(|e| {
        debug!("💻️ Could not parse create_order request. {e}");
        e
    })?;
    debug!("💻️ POST create_order for {:?} ({:?})", request.user_id, request.amount);
    let order = api.create_order(request.amount, request.user_id.as_deref()).await?;
    let response = CreateOrderResponse {
        order_id: order.id,
        amount: order.amount,
        currency: order.currency,
        key: checkout.razorpay_key_id.clone(),
    };
    Ok(HttpResponse::Ok().json(response))
}

//----------------------------------------------   Payments  ----------------------------------------------------
route!(verify_payment => Post "/verify_payment" impl LedgerStore);
/// Route handler for the verify_payment endpoint
///
/// Called by the payment page once the checkout widget reports a successful payment. The body must contain
/// `razorpay_order_id`, `razorpay_payment_id`, `razorpay_signature` and a `user_data` object with `ig_username`,
/// `full_name`, `email`, `phone` and `state`.
///
/// The request is rejected with a 400, and nothing is written, if any field is missing or the signature does not
/// check out. Otherwise a single ledger row is appended.
pub async fn verify_payment<B: LedgerStore>(
    body: web::Bytes,
    api: web::Data<LedgerApi<B>>,
    verifier: web::Data<PaymentVerifier>,
) -> Result<HttpResponse, ServerError> {
    let request = parse_body::<VerifyPaymentRequest>(&body)?;
    let (confirmation, profile) = request.validate().map_err(|e| {
        debug!("💻️ Rejecting verify_payment request. {e}");
        e
    })?;
    debug!("💻️ POST verify_payment for payment {} on order {}", confirmation.payment_id, confirmation.order_id);
    if !verifier.verify(&confirmation) {
        return Err(ServerError::InvalidPaymentSignature);
    }
    let row = api.append(LedgerRow::verified(&confirmation, &profile)).await?;
    let response = VerifyPaymentResponse { status: PAYMENT_VERIFIED_STATUS.to_string(), user: row.handle };
    Ok(HttpResponse::Ok().json(response))
}
