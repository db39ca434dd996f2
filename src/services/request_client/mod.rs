pub mod client;
mod transport;

pub use client::RequestClient;
