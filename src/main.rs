use anyhow::Result;
use clap::Parser;
use xassets::{pipeline, GenerateArgs, RunConfig};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(flatten)]
    generate: GenerateArgs,
}

fn main() -> Result<()> {
    use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};
    tracing_log::LogTracer::init().ok();
    let env = std::env::var("XASSETS_LOG").unwrap_or_else(|_| "error".into());
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_span_events(FmtSpan::ACTIVE | FmtSpan::CLOSE)
        .with_env_filter(EnvFilter::new(env))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
    log_panics::init();
    let args = Args::parse();
    let config = RunConfig::new(args.generate);
    pipeline::run(&config)
}
