use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use tracing::Level;

pub struct DelegatingWriter {
    inner: DelegatingInner,
}

enum DelegatingInner {
    File(Arc<File>),
    Sink(io::Sink),
}

impl Write for DelegatingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.inner {
            DelegatingInner::File(file) => (&**file).write(buf),
            DelegatingInner::Sink(sink) => sink.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.inner {
            DelegatingInner::File(file) => (&**file).flush(),
            DelegatingInner::Sink(sink) => sink.flush(),
        }
    }
}

/// Hands out writers to the log file, or to a sink when logging is off.
///
/// Stderr is never used: the demo draws on the alternate screen and stray
/// output would corrupt it.
#[derive(Clone, Debug, Default)]
pub struct SubscriberMakeWriter {
    file: Option<Arc<File>>,
}

impl SubscriberMakeWriter {
    pub fn sink() -> Self {
        Self::default()
    }

    pub fn append_to(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Some(Arc::new(file)),
        })
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SubscriberMakeWriter {
    type Writer = DelegatingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        let inner = match &self.file {
            Some(file) => DelegatingInner::File(Arc::clone(file)),
            None => DelegatingInner::Sink(io::sink()),
        };
        DelegatingWriter { inner }
    }
}

/// Initialize the global tracing subscriber, appending to `log_file` when
/// given. Safe to call multiple times; later calls leave the first subscriber
/// in place.
pub fn init_default(log_file: Option<&Path>) -> io::Result<()> {
    let writer = match log_file {
        Some(path) => SubscriberMakeWriter::append_to(path)?,
        None => SubscriberMakeWriter::sink(),
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .with_thread_names(false)
        .try_init();
    Ok(())
}
