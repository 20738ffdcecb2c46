pub mod navigate;
pub mod products;
pub mod session;
