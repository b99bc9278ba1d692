pub mod aggregate;

pub use aggregate::{OpportunityLineItem, OpportunityLineItemId};
