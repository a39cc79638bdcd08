use super::Navigator;

/// Records destinations instead of navigating. Used in tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    destinations: Vec<String>,
}

impl RecordingNavigator {
    pub fn destinations(&self) -> &[String] {
        &self.destinations
    }

    pub fn last(&self) -> Option<&str> {
        self.destinations.last().map(String::as_str)
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, destination: &str) {
        self.destinations.push(destination.to_string());
    }
}
