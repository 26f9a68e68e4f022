//! Built-in row factories
//!
//! - `string` - identity factory returning rows unchanged
//! - `numeric` - every field parsed as a decimal number
//! - `columns` - column-count guard wrapping another factory
//! - `deserialize` - positional deserialization into serde types

pub mod columns;
pub mod deserialize;
pub mod numeric;
pub mod string;

pub use columns::ExactColumns;
pub use deserialize::SerdeFactory;
pub use numeric::{NumericFactory, NumericRow};
pub use string::StringFactory;
