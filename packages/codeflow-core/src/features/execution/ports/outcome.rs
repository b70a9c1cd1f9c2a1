//! Step outcome policy port

use std::fmt::Debug;

/// Decides whether the next simulated step faults
pub trait OutcomePolicy: Debug + Send {
    fn is_fault(&mut self) -> bool;
}
