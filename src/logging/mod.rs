use std::fs::File;

pub use slog::FilterLevel as Level;
use slog::{Discard, Drain, Level as LogLevel, Logger, OwnedKV, SendSyncRefUnwindSafeKV};
use slog_async::Async;
use slog_term::{CompactFormat, Decorator, FullFormat, PlainDecorator, TermDecorator};

#[derive(Debug)]
pub enum Stream {
    StdOut,
    StdErr,
    File(File),
    Null,
}

impl Stream {
    pub fn is_null(&self) -> bool {
        match *self {
            Stream::Null => true,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Format {
    Full,
    Compact,
}

/// Builds a `Logger` to hand to a `Decoder`.
///
/// ```
/// #[macro_use]
/// extern crate slog;
/// extern crate arbor;
///
/// use arbor::logging::{Level, LoggerBuilder, Stream};
/// use arbor::syntax::graph::Decoder;
///
/// fn main() {
///     let logger = LoggerBuilder::new(Stream::StdErr).level(Level::Trace).build(o!());
///     let mut decoder = Decoder::default();
///     decoder.set_logger(logger);
/// }
/// ```
#[derive(Debug)]
pub struct LoggerBuilder {
    stream: Stream,
    level: Level,
    format: Format,
}

impl LoggerBuilder {
    pub fn new(stream: Stream) -> Self {
        LoggerBuilder {
            stream: stream,
            level: Level::Debug,
            format: Format::Full,
        }
    }

    pub fn level(mut self, l: Level) -> Self {
        self.level = l;
        self
    }

    pub fn format(mut self, f: Format) -> Self {
        self.format = f;
        self
    }

    pub fn build<T>(self, values: OwnedKV<T>) -> Logger
    where
        T: SendSyncRefUnwindSafeKV + 'static,
    {
        // `Level::Off` has no counterpart among record levels
        let level = match LogLevel::from_usize(self.level.as_usize()) {
            Some(level) => level,
            None => return Logger::root(Discard, values),
        };
        let format = self.format;
        match self.stream {
            Stream::StdOut => {
                let drain = build_drain(TermDecorator::new().stdout().build(), format);
                Logger::root(drain.filter_level(level).fuse(), values)
            }
            Stream::StdErr => {
                let drain = build_drain(TermDecorator::new().stderr().build(), format);
                Logger::root(drain.filter_level(level).fuse(), values)
            }
            Stream::File(f) => {
                let drain = build_drain(PlainDecorator::new(f), format);
                Logger::root(drain.filter_level(level).fuse(), values)
            }
            Stream::Null => Logger::root(Discard, values),
        }
    }
}

fn build_drain<D: Decorator + Send + 'static>(decorator: D, format: Format) -> Async {
    match format {
        Format::Compact => {
            let drain = CompactFormat::new(decorator).use_local_timestamp().build();
            Async::new(drain.fuse()).build()
        }
        Format::Full => {
            let drain = FullFormat::new(decorator).use_local_timestamp().build();
            Async::new(drain.fuse()).build()
        }
    }
}
