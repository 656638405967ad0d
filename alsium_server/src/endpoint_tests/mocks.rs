use alsium_engine::{LedgerRow, LedgerStore, LedgerStoreError, NewOrder, Order, OrderGateway, OrderGatewayError};
use mockall::mock;

mock! {
    pub Gateway {}
    impl OrderGateway for Gateway {
        async fn create_order(&self, order: &NewOrder) -> Result<Order, OrderGatewayError>;
    }
}

mock! {
    pub Ledger {}
    impl LedgerStore for Ledger {
        async fn append_row(&self, row: &LedgerRow) -> Result<(), LedgerStoreError>;
    }
}
