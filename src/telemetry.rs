use std::io::{self, Write};

use tracing::{Subscriber, subscriber};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Registry, fmt::MakeWriter, layer::SubscriberExt};

use crate::configuration::ApplicationSettings;

/// Subscriber used around `UserService`: bunyan JSON records written to
/// `sink`, so the `user_name` recorded on the create span shows up on every
/// record inside it. `RUST_LOG` wins over `env_filter` when set.
pub fn get_subscriber<Sink>(
    name: String,
    env_filter: String,
    sink: Sink,
) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));

    let formatting_layer = BunyanFormattingLayer::new(name, MakeNewlineWriter(sink));

    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
}

/// Same subscriber, named and filtered from `configuration/base.yaml`.
pub fn get_subscriber_for<Sink>(
    settings: ApplicationSettings,
    sink: Sink,
) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    get_subscriber(settings.name, settings.log_level, sink)
}

// Installs the global subscriber and bridges `log` records into it.
// Panics on a second call, test binaries guard it with a `OnceLock`.
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) {
    LogTracer::init().expect("Failed to set logger");
    subscriber::set_global_default(subscriber).expect("Failed to set subscriber");
}

/// Ends every bunyan record with an extra `\n`, which keeps `TEST_LOG`
/// output readable and lets tests split captured logs with `lines()`.
pub struct NewlineWriter<W> {
    inner: W,
}

impl<W: Write> Write for NewlineWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write_all(buf)?;
        self.inner.write_all(b"\n")?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

pub struct MakeNewlineWriter<M>(pub M);

impl<'a, M> MakeWriter<'a> for MakeNewlineWriter<M>
where
    M: MakeWriter<'a> + 'a,
{
    type Writer = NewlineWriter<<M as MakeWriter<'a>>::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        NewlineWriter {
            inner: self.0.make_writer(),
        }
    }
}
