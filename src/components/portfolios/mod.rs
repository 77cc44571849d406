mod reducer;

pub use reducer::{reduce, PortfolioAction, PortfolioState};
