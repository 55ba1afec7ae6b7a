//! Helper tool to preview generated swatch ramps for the demo palette.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod ramp_preview;

fn main() -> anyhow::Result<()> {
    init_tracing();
    ramp_preview::run()
}

/// Configure tracing subscribers so the engine's diagnostics are visible.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
