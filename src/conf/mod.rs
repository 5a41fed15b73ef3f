mod config;
mod database;
mod pool;
mod server;

pub use config::Config;
pub use database::DatabaseConfig;
pub use pool::PoolConfig;
pub use server::ServerConfig;
