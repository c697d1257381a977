use crate::features::budget_details::models::BudgetDetail;

/// Rewrite a decoded batch into compound region codes.
///
/// Takes the batch by value so a transformed batch cannot be handed back in by
/// accident while the raw one is still around. No validation happens here:
/// malformed codes compose into malformed compound codes.
pub fn transform(details: Vec<BudgetDetail>) -> Vec<BudgetDetail> {
    details
        .into_iter()
        .map(BudgetDetail::into_compound_codes)
        .collect()
}
