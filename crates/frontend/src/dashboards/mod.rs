pub mod bookings;
pub mod customers;
pub mod demo_data;
pub mod overview;
pub mod placeholder;

pub use bookings::BookingsList;
pub use customers::CustomersList;
pub use overview::Overview;
pub use placeholder::RegionPlaceholder;
