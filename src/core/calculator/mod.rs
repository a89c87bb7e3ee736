pub mod breaks;
pub mod burst;
pub mod clocking;
pub mod instance;
pub mod punctuality;
pub mod record;
