pub mod use_fetch;
pub mod use_pending_orders;

pub use use_fetch::{use_fetch, UseFetchHandle};
pub use use_pending_orders::{use_pending_orders, UsePendingOrdersHandle};
