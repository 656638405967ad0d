pub mod errors;
pub mod ledger_api;
pub mod order_flow_api;
