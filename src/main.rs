//! linetap binary: CLI parsing, logging, and process lifecycle.

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use linetap::capture::{spawn_sink, Direction, PcapFile};
use linetap::pump::StreamPump;
use linetap::transport;
use linetap::Result;

#[derive(Parser, Debug)]
#[command(name = "linetap")]
#[command(version, about = "Passive serial-line tap: records HDLC traffic from both halves of a modem link to a pcap file readable by Wireshark", long_about = None)]
struct Args {
    /// Serial device on the DTE side (e.g. /dev/ttyS0 or COM1)
    dte: String,

    /// Serial device on the DCE side (e.g. /dev/ttyS1 or COM2)
    dce: String,

    /// Baud rate for both ports
    #[arg(short = 'b', long, default_value_t = 115200)]
    baud: u32,

    /// Output pcap file
    #[arg(short = 'o', long, default_value = "ppp.pcap")]
    output: PathBuf,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    info!("DTE:     {} symbol '<'", args.dte);
    info!("DCE:     {} symbol '>'", args.dce);
    info!("baud:    {}", args.baud);
    info!("outFile: {}", args.output.display());

    if let Err(e) = run(args).await {
        error!("fatal: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let file = PcapFile::create(&args.output).await?;
    let (sink, sink_task) = spawn_sink(file);

    let dte = transport::open(&args.dte, args.baud)?;
    let dce = transport::open(&args.dce, args.baud)?;

    let dte_pump = tokio::spawn(StreamPump::new(dte, Direction::Incoming, sink.clone()).run());
    let dce_pump = tokio::spawn(StreamPump::new(dce, Direction::Outgoing, sink).run());

    info!("tap running, press Ctrl-C to exit");

    // The pumps run for the life of the process; any early return from
    // one of them (or from the sink task) is worth surfacing.
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("interrupt received, closing capture");
            Ok(())
        }
        res = dte_pump => {
            warn!("DTE pump stopped");
            res?
        }
        res = dce_pump => {
            warn!("DCE pump stopped");
            res?
        }
        res = sink_task => {
            warn!("capture sink stopped");
            res?
        }
    }
}
