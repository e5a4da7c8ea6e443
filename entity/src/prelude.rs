pub use super::flight::Entity as Flight;
pub use super::flight_entry::Entity as FlightEntry;
pub use super::user::Entity as User;
