pub mod resolver;
pub mod slots;

pub use resolver::{Availability, AvailabilityResolver, RejectionReason, ResolverConfig};
pub use slots::TimeRange;
