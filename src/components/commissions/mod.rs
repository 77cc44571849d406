mod reducer;

pub use reducer::{reduce, CommissionAction, CommissionState};
