pub mod api;
pub mod conf;
pub mod core;
pub mod service;

#[cfg(feature = "testutil")]
pub mod testutil;
