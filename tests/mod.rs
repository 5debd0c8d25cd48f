pub mod aggregate;
pub mod macros;
pub mod traits;
