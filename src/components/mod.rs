pub mod app;
pub mod create_location_form;
pub mod create_order_page;
pub mod dropdown_with_input;
pub mod network_error_result;
pub mod notification;
pub mod pending_orders_page;
pub mod transport_applications_page;

pub use app::App;
pub use create_location_form::CreateLocationForm;
pub use create_order_page::CreateOrderPage;
pub use dropdown_with_input::{DropdownWithInput, Selection};
pub use network_error_result::NetworkErrorResult;
pub use notification::{Notification, NotificationData};
pub use pending_orders_page::PendingOrdersPage;
pub use transport_applications_page::TransportApplicationsPage;
