pub mod account;
pub mod connection;
pub mod migration;
pub mod records;
