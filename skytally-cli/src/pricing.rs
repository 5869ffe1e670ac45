pub mod provider;
pub mod rates;
