pub mod analysis;
pub mod investors;
pub mod stocks;
