pub mod calculations;
pub mod collector;

pub use calculations::RentCollection;
pub use collector::RentCollector;
