pub mod fare;
pub mod network;
pub mod rider;
pub mod shared;
pub mod system;
pub mod ticketing;
pub mod wallet;

pub mod prelude {
    pub use crate::fare::{FareCalculator, FareOptions, FareRules, RiderType};
    pub use crate::network::{Journey, JourneyPlanner, Network};
    pub use crate::rider::Rider;
    pub use crate::shared::{Amount, Clock, ClockTime, FixedClock, SystemClock};
    pub use crate::system::{MetroSystem, Quote};
    pub use crate::ticketing::{Pass, Ticket};
    pub use crate::wallet::Wallet;
}
