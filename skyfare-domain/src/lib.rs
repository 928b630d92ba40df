pub mod booking;
pub mod inventory;
pub mod search;
