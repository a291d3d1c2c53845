pub mod config;
pub mod errors;
pub mod export;
pub mod models;
pub mod seed;
pub mod storage;
pub mod store;
pub mod validation;
