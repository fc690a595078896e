pub mod api_client;
pub mod order_queries;

pub use api_client::ApiClient;
pub use order_queries::{OrderTag, QueryClient, Subscription, PENDING_ORDERS_KEY};
