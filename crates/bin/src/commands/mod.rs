pub mod audit;
pub mod between;
pub mod moves;
pub mod rebalance;
