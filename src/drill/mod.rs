//! Drill core: practice modes, session state machine, clock and keyboard layout.
//!
//! Nothing in here touches the terminal. The `app` module feeds key labels and
//! timestamps in and renders whatever state comes back out.

pub mod clock;
pub mod layout;
pub mod practice;
pub mod session;
