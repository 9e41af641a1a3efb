// Tracing subscriber assembly
//

use tracing::Subscriber;
use tracing_log::LogTracer;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

pub struct TracingSubscriber {
    default_directives: String,
    pretty: bool,
}

impl TracingSubscriber {
    pub fn new() -> Self {
        Self {
            default_directives: "info".into(),
            pretty: false,
        }
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// `RUST_LOG` takes precedence over the built-in directives.
    pub fn build<Sink>(self, sink: Sink) -> Box<dyn Subscriber + Send + Sync>
    where
        Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.default_directives));

        let fmt_layer = tracing_subscriber::fmt::layer().with_writer(sink);

        if self.pretty {
            Box::new(Registry::default().with(env_filter).with(fmt_layer.pretty()))
        } else {
            Box::new(Registry::default().with(env_filter).with(fmt_layer))
        }
    }
}

impl Default for TracingSubscriber {
    fn default() -> Self {
        Self::new()
    }
}

/// Redirects `log` records into tracing, then installs the subscriber.
/// Call once per process.
pub fn init_global_default(subscriber: impl Subscriber + Send + Sync) {
    LogTracer::init().expect("set log tracer");
    tracing::subscriber::set_global_default(subscriber).expect("set tracing subscriber");
}
