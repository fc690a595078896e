pub mod location;
pub mod order;
pub mod transport_application;

pub use location::{City, GeoLocation, Street};
pub use order::Order;
pub use transport_application::{remove_application, TransportApplication, User};
