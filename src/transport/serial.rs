//! Serial port byte source.
//!
//! Boundary glue only: opening and configuring the port. Everything
//! downstream works against `AsyncRead` and never sees a port type.

use tokio_serial::{DataBits, FlowControl, Parity, SerialPortBuilderExt, SerialStream, StopBits};

use crate::error::Result;

/// Open a serial device for tapping: 8 data bits, no parity, one stop
/// bit, no flow control.
///
/// The returned stream implements `AsyncRead` and is handed straight
/// to a pump. Open or configuration failures are fatal to the process;
/// there is no retry at this layer.
pub fn open(device: &str, baud: u32) -> Result<SerialStream> {
    let stream = tokio_serial::new(device, baud)
        .data_bits(DataBits::Eight)
        .parity(Parity::None)
        .stop_bits(StopBits::One)
        .flow_control(FlowControl::None)
        .open_native_async()?;
    Ok(stream)
}
