//! Delivery of the finished passphrase.
//!
//! The pipeline itself never touches the terminal or the clipboard; it
//! hands the passphrase to an [`OutputSink`]. Only the entry point binds
//! the real OS clipboard, which keeps everything upstream pure and lets
//! tests substitute a capturing sink.

use clipboard::{ClipboardContext, ClipboardProvider};

use crate::config::OutputMode;
use crate::error::{PassgenError, Result};

/// A destination for the generated passphrase.
pub trait OutputSink {
    fn deliver(&mut self, passphrase: &str) -> Result<()>;
}

/// Places the passphrase on the OS clipboard.
pub struct ClipboardSink;

impl OutputSink for ClipboardSink {
    fn deliver(&mut self, passphrase: &str) -> Result<()> {
        let mut ctx: ClipboardContext = ClipboardProvider::new()
            .map_err(|e| PassgenError::Clipboard(format!("clipboard init error: {e}")))?;

        ctx.set_contents(passphrase.to_string())
            .map_err(|e| PassgenError::Clipboard(format!("clipboard set error: {e}")))?;

        Ok(())
    }
}

/// Writes the passphrase and a trailing newline to standard output.
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn deliver(&mut self, passphrase: &str) -> Result<()> {
        println!("{passphrase}");
        Ok(())
    }
}

/// The real sink for an output mode.
pub fn sink_for(mode: OutputMode) -> Box<dyn OutputSink> {
    match mode {
        OutputMode::Clipboard => Box::new(ClipboardSink),
        OutputMode::Print => Box::new(StdoutSink),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CaptureSink(Vec<String>);

    impl OutputSink for CaptureSink {
        fn deliver(&mut self, passphrase: &str) -> Result<()> {
            self.0.push(passphrase.to_string());
            Ok(())
        }
    }

    #[test]
    fn sinks_are_substitutable() {
        let mut sink = CaptureSink(Vec::new());
        sink.deliver("RedFox").unwrap();
        assert_eq!(sink.0, ["RedFox"]);
    }
}
