pub mod delivery;
pub mod payment;
pub mod staff;

pub use delivery::DeliveryMode;
pub use payment::PaymentMethod;
pub use staff::{StaffRole, StaffRoster};
