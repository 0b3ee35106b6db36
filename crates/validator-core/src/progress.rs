//! Upload progress values.

/// Progress of the current upload, in percent.
///
/// Callers pass values in `0..=100`; nothing is clamped.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Progress(pub f64);

impl Progress {
    /// CSS width of the filled bar, e.g. `"42%"`.
    pub fn width(&self) -> String {
        format!("{}%", self.0)
    }

    /// Value for `aria-valuenow`.
    pub fn aria_value(&self) -> String {
        self.0.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_text() {
        assert_eq!(Progress(0.0).width(), "0%");
        assert_eq!(Progress(50.0).width(), "50%");
        assert_eq!(Progress(33.5).width(), "33.5%");
        assert_eq!(Progress(100.0).aria_value(), "100");
    }

    #[test]
    fn test_progress_is_not_clamped() {
        assert_eq!(Progress(140.0).width(), "140%");
        assert_eq!(Progress(-5.0).aria_value(), "-5");
    }
}
