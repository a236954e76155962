//! Byte-source transport.
//!
//! The tap core only needs `AsyncRead`; this module supplies the real
//! thing: serial ports opened at a configured baud rate.

pub mod serial;

pub use serial::open;
