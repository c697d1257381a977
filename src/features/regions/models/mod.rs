mod region;

pub use region::{normalize_regency_code, parse_regency_code, Region};
