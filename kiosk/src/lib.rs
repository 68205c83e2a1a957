//! Seat Kiosk - reservation kiosk core
//!
//! # Module layout
//!
//! ```text
//! kiosk/src/
//! ├── config.rs    # environment configuration
//! ├── logger.rs    # tracing setup, audit log
//! ├── board.rs     # per-table layout and lock
//! ├── screens/     # usage, personal, group, cancel, end
//! ├── face.rs      # face identification verdict
//! └── kiosk.rs     # fetch, handle, submit
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod face;
pub mod kiosk;
pub mod logger;
pub mod screens;

pub use board::{TableBoard, TableView};
pub use config::Config;
pub use error::{KioskError, KioskResult};
pub use face::FaceVerdict;
pub use kiosk::Kiosk;
pub use logger::{cleanup_old_logs, init_logger_with_file};
pub use screens::SeatPick;

/// Load `.env` and start logging.
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(&config.log_level, config.log_json, config.log_dir.as_deref())?;
    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
   _____            __
  / ___/___  ____ _/ /_
  \__ \/ _ \/ __ `/ __/
 ___/ /  __/ /_/ / /_
/____/\___/\__,_/\__/   kiosk
    "#
    );
}
