//! Contains common text reading logic.

mod routing;
pub use self::routing::CoordIndex;

mod text_reader;
pub(crate) use self::text_reader::*;
