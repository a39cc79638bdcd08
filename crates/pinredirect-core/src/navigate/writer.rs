//! Navigators that hand the destination to an output stream.
//!
//! `navigate` has no failure channel, so the first write error is kept and
//! surfaced by `finish`, which also flushes.

use std::io::{self, Write};

use super::Navigator;
use crate::html::render_redirect_page;

#[derive(Debug)]
struct Sink<W> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> Sink<W> {
    fn new(out: W) -> Self {
        Self { out, error: None }
    }

    fn deliver(&mut self, bytes: &[u8], destination: &str) {
        if self.error.is_some() {
            return;
        }
        let res = self.out.write_all(bytes).and_then(|()| self.out.flush());
        if let Err(e) = res {
            tracing::warn!("navigation to {} not delivered: {}", destination, e);
            self.error = Some(e);
        }
    }

    fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Writes the destination followed by a newline.
#[derive(Debug)]
pub struct PlainNavigator<W> {
    sink: Sink<W>,
}

impl<W: Write> PlainNavigator<W> {
    pub fn new(out: W) -> Self {
        Self { sink: Sink::new(out) }
    }

    /// Flush and return the writer, or the first error any navigation hit.
    pub fn finish(self) -> io::Result<W> {
        self.sink.finish()
    }
}

impl<W: Write> Navigator for PlainNavigator<W> {
    fn navigate(&mut self, destination: &str) {
        let line = format!("{destination}\n");
        self.sink.deliver(line.as_bytes(), destination);
    }
}

/// Writes an HTML page that replaces the current history entry with the
/// destination.
#[derive(Debug)]
pub struct HtmlNavigator<W> {
    sink: Sink<W>,
}

impl<W: Write> HtmlNavigator<W> {
    pub fn new(out: W) -> Self {
        Self { sink: Sink::new(out) }
    }

    pub fn finish(self) -> io::Result<W> {
        self.sink.finish()
    }
}

impl<W: Write> Navigator for HtmlNavigator<W> {
    fn navigate(&mut self, destination: &str) {
        let page = render_redirect_page(destination);
        self.sink.deliver(page.as_bytes(), destination);
    }
}

/// Either writer navigator, as picked by [`NavigatorKind`](super::NavigatorKind).
#[derive(Debug)]
pub enum WriterNavigator<W> {
    Plain(PlainNavigator<W>),
    Html(HtmlNavigator<W>),
}

impl<W: Write> WriterNavigator<W> {
    pub fn finish(self) -> io::Result<W> {
        match self {
            WriterNavigator::Plain(n) => n.finish(),
            WriterNavigator::Html(n) => n.finish(),
        }
    }
}

impl<W: Write> Navigator for WriterNavigator<W> {
    fn navigate(&mut self, destination: &str) {
        match self {
            WriterNavigator::Plain(n) => n.navigate(destination),
            WriterNavigator::Html(n) => n.navigate(destination),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct BrokenPipe {
        writes: usize,
    }

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            self.writes += 1;
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn plain_writes_one_line_per_navigation() {
        let mut nav = PlainNavigator::new(Vec::new());
        nav.navigate("https://a/");
        nav.navigate("b");
        assert_eq!(nav.finish().unwrap(), b"https://a/\nb\n");
    }

    #[test]
    fn html_writes_full_page() {
        let mut nav = HtmlNavigator::new(Vec::new());
        nav.navigate("https://example.com/x");
        let page = String::from_utf8(nav.finish().unwrap()).unwrap();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("https://example.com/x"));
    }

    #[test]
    fn write_failure_surfaces_on_finish() {
        let mut nav = PlainNavigator::new(BrokenPipe { writes: 0 });
        nav.navigate("x");
        let err = nav.finish().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);

        let mut nav = HtmlNavigator::new(BrokenPipe { writes: 0 });
        nav.navigate("x");
        assert!(nav.finish().is_err());
    }

    #[test]
    fn writes_stop_after_first_failure() {
        let mut nav = PlainNavigator::new(BrokenPipe { writes: 0 });
        nav.navigate("a");
        nav.navigate("b");
        assert_eq!(nav.sink.out.writes, 1);
    }

    #[test]
    fn finish_without_navigation_is_empty() {
        let nav = WriterNavigator::Html(HtmlNavigator::new(Vec::new()));
        assert!(nav.finish().unwrap().is_empty());
    }
}
