//! Documents stored by the service and the payloads that create, change and select them.

pub mod order;
pub mod product;

pub use order::*;
pub use product::*;
