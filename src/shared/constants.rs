// =============================================================================
// STORAGE
// =============================================================================

/// Source table for the regions to synchronize
pub const REGION_TABLE: &str = "master_kota";

/// Destination table for budget realization lines
pub const BUDGET_DETAIL_TABLE: &str = "siskeudes_detail_anggaran";

// =============================================================================
// DB OPERATION LABELS
// =============================================================================

pub const OP_BEGIN_TRANSACTION: &str = "begin_transaction";
pub const OP_UPSERT_BUDGET_DETAIL: &str = "upsert_budget_detail";
pub const OP_COMMIT_TRANSACTION: &str = "commit_transaction";

// =============================================================================
// HTTP
// =============================================================================

pub const USER_AGENT: &str = "AnggaranSync/0.1 (budget-realization-sync)";
