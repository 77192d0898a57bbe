//! Presentation-state synchronization: one record set shown in several
//! containers, kept consistent by the components below.

pub mod dispatch;
pub mod filter;
pub mod record_state;
pub mod registry;
pub mod view_switch;
