//! The navigation capability.
//!
//! A [`Navigator`] replaces the current location with a destination. It has
//! no return value: whatever happens after the hand-off belongs to the host.

mod recording;
mod writer;

pub use recording::RecordingNavigator;
pub use writer::{HtmlNavigator, PlainNavigator, WriterNavigator};

use serde::{Deserialize, Serialize};

/// Replace-style navigation: the destination overwrites the current entry
/// rather than being pushed after it.
pub trait Navigator {
    fn navigate(&mut self, destination: &str);
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
    fn navigate(&mut self, destination: &str) {
        (**self).navigate(destination);
    }
}

/// Which writer-backed navigator the CLI builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigatorKind {
    /// Destination as a single line of text.
    #[default]
    Plain,
    /// Static HTML page that performs `location.replace`.
    Html,
}

impl NavigatorKind {
    pub fn build<W: std::io::Write>(self, out: W) -> WriterNavigator<W> {
        match self {
            NavigatorKind::Plain => WriterNavigator::Plain(PlainNavigator::new(out)),
            NavigatorKind::Html => WriterNavigator::Html(HtmlNavigator::new(out)),
        }
    }
}
