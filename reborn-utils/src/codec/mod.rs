//! Wire codecs.

mod errors;
mod var_long;

pub use errors::{ReadingError, WritingError};
pub use var_long::VarLong;
