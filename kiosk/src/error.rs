use seat_client::ClientError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KioskError {
    #[error("Seat server error: {0}")]
    Client(#[from] ClientError),

    #[error("No table data from server")]
    NoTables,
}

pub type KioskResult<T> = Result<T, KioskError>;
