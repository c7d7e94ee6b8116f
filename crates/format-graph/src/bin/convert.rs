use clap::Parser;
use instance_format::convert_instance;
use instance_format::io::OutputLayout;
use std::error::Error;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Parser)]
struct Cli {
    #[arg(long)]
    input: PathBuf,
    #[arg(long)]
    output: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputLayout::Joined)]
    layout: OutputLayout,
    #[arg(long)]
    log_level: Option<Level>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if let Some(level) = cli.log_level {
        let subscriber = FmtSubscriber::builder().with_max_level(level).with_span_events(FmtSpan::CLOSE).finish();

        subscriber.init();
    };

    let summary = convert_instance(&cli.input, &cli.output, cli.layout)?;
    println!("n {} m {}", summary.num_vertices, summary.num_edges);
    Ok(())
}
