pub mod balance;
pub mod connect;
