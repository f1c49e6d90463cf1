//! Pizza Server - restaurants, pizzas and the prices they are offered at
//!
//! # Module layout
//!
//! ```text
//! pizza-server/src/
//! ├── core/          # config, state, errors, server
//! ├── api/           # HTTP routes and handlers
//! ├── middleware/    # request logging
//! ├── db/            # SQLite pool, repositories, seed data
//! └── utils/         # error re-exports, logger
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod utils;

pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

pub use utils::logger::init_logger_with_file;

/// Load `.env`, read [`Config`] and initialise logging from it
pub fn setup_environment() -> Config {
    // A missing .env file is fine
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}
