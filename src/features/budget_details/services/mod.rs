mod budget_detail_store;
mod transformer;

pub use budget_detail_store::BudgetDetailStore;
pub use transformer::transform;
