//! Lead submission: the seam between the forms and whatever receives leads

mod error;
mod simulated;
mod traits;

pub use error::SubmitError;
pub use simulated::{SimulatedSubmitter, SubmitDelays};
pub use traits::LeadSubmitter;

#[cfg(test)]
pub use traits::MockLeadSubmitter;
