pub mod aggregate;

pub use aggregate::OpportunityId;
