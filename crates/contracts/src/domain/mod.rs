pub mod common;

pub mod a001_product;
pub mod a002_opportunity;
pub mod a003_opportunity_line_item;
