mod budget_detail;

pub use budget_detail::BudgetDetail;
