//! Weather station console reader.
//!
//! Opens the serial port the console is attached to, then runs the decode
//! loop forever: synchronize on the frame marker, decode one frame, print
//! the measurement. Checksum failures are logged and skipped; transport
//! failures and unknown device codes terminate the process.

use std::io::{self, Read};
use std::time::Duration;

use clap::Parser;
use serialport::{DataBits, Parity, StopBits};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;
use wxwatch_protocol::{FrameReader, Measurement, ProtocolError};

/// How long one serial read may wait before the port reports a timeout.
/// Timeouts are retried, so this only bounds the poll interval, not how
/// long the reader waits for the next frame.
const READ_TIMEOUT: Duration = Duration::from_secs(1);

#[derive(Debug, Parser)]
#[command(name = "wxwatch", about = "Decode weather station console telemetry")]
struct Args {
    /// Serial device the console is attached to.
    #[arg(short, long, default_value = "/dev/ttyS1")]
    port: String,

    /// Baud rate.
    #[arg(short, long, default_value_t = 9600)]
    baud: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let port = serialport::new(&args.port, args.baud)
        .data_bits(DataBits::Eight)
        .parity(Parity::None)
        .stop_bits(StopBits::One)
        .timeout(READ_TIMEOUT)
        .open()?;

    info!(port = %args.port, baud = args.baud, "listening");

    let reader = FrameReader::new(BlockingRead::new(port));
    if let Err(err) = run(reader) {
        error!("{err}");
        return Err(err.into());
    }
    Ok(())
}

/// The decode loop: one synchronize-and-dispatch cycle per iteration,
/// forever. Only fatal errors return.
fn run<R: Read>(mut reader: FrameReader<R>) -> Result<(), ProtocolError> {
    loop {
        match reader.next_reading() {
            Ok(Some(measurement)) => report(&measurement),
            Ok(None) => {} // reserved device code, nothing to report
            Err(err) if err.is_recoverable() => warn!("{err}"),
            Err(err) => return Err(err),
        }
    }
}

/// Measurement sink: one line per reading on stdout, battery warnings on
/// the log.
fn report(measurement: &Measurement) {
    if measurement.battery_low() {
        warn!(device = %measurement.device(), "battery low");
    }
    println!("{measurement}");
}

/// Adapts the port's timeout-based reads to the blocking contract the frame
/// reader expects: timeouts are retried until data arrives, every other
/// error passes through.
struct BlockingRead<R> {
    inner: R,
}

impl<R> BlockingRead<R> {
    fn new(inner: R) -> Self {
        BlockingRead { inner }
    }
}

impl<R: Read> Read for BlockingRead<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            match self.inner.read(buf) {
                Err(err) if err.kind() == io::ErrorKind::TimedOut => {
                    debug!("serial read timed out, retrying");
                }
                other => return other,
            }
        }
    }
}
