use std::result::Result as stdResult;
use thiserror::Error;

pub type Result<T> = stdResult<T, Error>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("no such Left value")]
    MissingLeft,
    #[error("no such Right value")]
    MissingRight,
}
