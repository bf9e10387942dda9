pub mod narrative;
pub mod numbering;
pub mod policy;
pub mod workflow;
