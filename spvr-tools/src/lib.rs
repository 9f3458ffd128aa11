pub mod balance_check;
pub mod bootstrap;
