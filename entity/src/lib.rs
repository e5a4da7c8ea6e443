pub mod prelude;

pub mod flight;
pub mod flight_entry;
pub mod user;
