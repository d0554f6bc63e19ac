mod either;
mod errors;

pub use either::Either;
pub use errors::{Error, Result};
