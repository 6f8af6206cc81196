#![no_std]

pub mod cycle_delay;
pub mod pins;
pub mod rtt_display;
pub mod tick;
