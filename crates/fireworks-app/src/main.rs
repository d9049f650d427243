use std::io;
use std::process;

use fireworks_app::config::{OutputMode, RunnerConfig};
use fireworks_app::game_loop;
use fireworks_app::sink::{FrameSink, JsonLinesSink, LogSink};

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Logs go to stderr so JSON frames on stdout stay clean.
    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn main() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = RunnerConfig::from_env();
    let mut sink: Box<dyn FrameSink> = match config.output {
        OutputMode::Log => Box::new(LogSink::new(config.stats_every)),
        OutputMode::Json => Box::new(JsonLinesSink::new(io::stdout().lock())),
    };

    if let Err(e) = game_loop::run(&config, sink.as_mut()) {
        tracing::error!(error = %e, "frame loop stopped");
        process::exit(1);
    }
}
