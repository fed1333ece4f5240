//! Speech output capability.
//!
//! The storefront talks to shoppers through a [`Speaker`]. A new utterance
//! supersedes the one in progress.

/// Text-to-speech sink.
pub trait Speaker {
    /// Say `text`, cancelling anything still being said.
    fn speak(&mut self, text: &str);

    /// Stop the current utterance, if any.
    fn cancel(&mut self);
}

/// Speaker that emits each utterance as a `tracing` event on this module's
/// target.
#[derive(Debug, Default)]
pub struct TracingSpeaker {
    current: Option<String>,
}

impl TracingSpeaker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The last utterance that has not been cancelled.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

impl Speaker for TracingSpeaker {
    fn speak(&mut self, text: &str) {
        self.cancel();
        tracing::info!(utterance = text, "speak");
        self.current = Some(text.to_string());
    }

    fn cancel(&mut self) {
        if let Some(previous) = self.current.take() {
            tracing::debug!(utterance = %previous, "cancel");
        }
    }
}

/// Speaker for environments without speech output.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSpeaker;

impl Speaker for SilentSpeaker {
    fn speak(&mut self, _text: &str) {}

    fn cancel(&mut self) {}
}

impl<T: Speaker + ?Sized> Speaker for Box<T> {
    fn speak(&mut self, text: &str) {
        (**self).speak(text);
    }

    fn cancel(&mut self) {
        (**self).cancel();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::layer::SubscriberExt;

    use super::*;
    use crate::config::DEFAULT_LOG_FILTER;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn captured_with_filter(filter: &str, say: &str) -> String {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::new(filter))
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(move || writer.clone()),
            );
        tracing::subscriber::with_default(subscriber, || {
            TracingSpeaker::new().speak(say);
        });
        let bytes = capture.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_default_filter_lets_utterances_through() {
        let output = captured_with_filter(
            DEFAULT_LOG_FILTER,
            "Welcome back Ari. Here are your recommendations.",
        );
        assert!(output.contains("Welcome back Ari. Here are your recommendations."));
        assert!(output.contains("sportshop_storefront::speech"));
    }

    #[test]
    fn test_utterances_can_be_silenced_by_filter() {
        let output = captured_with_filter("sportshop_storefront::speech=off", "quiet please");
        assert!(output.is_empty());
    }

    #[test]
    fn test_new_utterance_supersedes_previous() {
        let mut speaker = TracingSpeaker::new();
        speaker.speak("first");
        speaker.speak("second");
        assert_eq!(speaker.current(), Some("second"));
    }

    #[test]
    fn test_cancel_clears_current() {
        let mut speaker = TracingSpeaker::new();
        speaker.speak("hello");
        speaker.cancel();
        assert_eq!(speaker.current(), None);
        speaker.cancel();
    }

    #[test]
    fn test_boxed_speaker_delegates() {
        let mut speaker: Box<dyn Speaker> = Box::new(TracingSpeaker::new());
        speaker.speak("boxed");
        speaker.cancel();
        let mut silent: Box<dyn Speaker> = Box::new(SilentSpeaker);
        silent.speak("nothing");
    }
}
