pub mod apartment;
pub mod error;
pub mod renter;
pub mod room;
