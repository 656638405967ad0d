mod ledger_store;
mod order_gateway;

pub use ledger_store::{LedgerStore, LedgerStoreError};
pub use order_gateway::{OrderGateway, OrderGatewayError};
