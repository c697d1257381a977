pub mod budget_details;
pub mod regions;
pub mod sync;
