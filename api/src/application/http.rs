pub mod kitchen;
pub mod server;
