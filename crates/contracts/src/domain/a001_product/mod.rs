pub mod aggregate;

pub use aggregate::{ProductBrief, ProductId, PRODUCT2_OBJECT};
