pub mod request_client;

pub use request_client::RequestClient;
