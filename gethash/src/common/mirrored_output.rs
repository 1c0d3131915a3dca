// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Decoded output on its way to the display, with a copy of every byte kept so the
//! clipboard gets exactly what was shown.

use miette::IntoDiagnostic;
use std::io::{self, Write};

/// Writes through to `writer` and keeps a copy of what was written.
#[derive(Debug)]
pub struct MirroredOutput<W: Write> {
    writer: W,
    written: Vec<u8>,
}

impl<W: Write> MirroredOutput<W> {
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            written: Vec::new(),
        }
    }

    /// Write the rendered output of one source, then end it.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn write_rendered(&mut self, rendered: &str) -> miette::Result<()> {
        self.write_all(rendered.as_bytes()).into_diagnostic()?;
        self.end_source()
    }

    /// Output that doesn't end with a newline gets one, so the next source (or the
    /// shell prompt) starts on a line of its own.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn end_source(&mut self) -> miette::Result<()> {
        if self.written.last().is_some_and(|&byte| byte != b'\n') {
            self.write_all(b"\n").into_diagnostic()?;
        }
        self.flush().into_diagnostic()
    }

    /// Everything written so far.
    #[must_use]
    pub fn written(&self) -> &[u8] { &self.written }

    /// Everything written so far, as text to put on the clipboard.
    #[must_use]
    pub fn written_text(&self) -> String {
        String::from_utf8_lossy(&self.written).into_owned()
    }

    #[must_use]
    pub fn get_ref(&self) -> &W { &self.writer }
}

impl<W: Write> Write for MirroredOutput<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let bytes_written = self.writer.write(buf)?;
        self.written.extend_from_slice(&buf[..bytes_written]);
        Ok(bytes_written)
    }

    fn flush(&mut self) -> io::Result<()> { self.writer.flush() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{common::{clipboard_test_fixtures::TestClipboard, copy_to_clipboard,
                         decode_stream},
                hash_decode::{DecodeOptions, LineDecoder, decode_text}};
    use std::io::Cursor;
    use test_case::test_case;

    /// Decode each input like the binary does, then copy to a test clipboard.
    fn display_and_copy(inputs: &[&str]) -> (String, String) {
        let mut output = MirroredOutput::new(Vec::new());
        for input in inputs {
            let report = decode_text(input, &DecodeOptions::default());
            output.write_rendered(&report.render()).unwrap();
        }

        let mut clipboard = TestClipboard::default();
        copy_to_clipboard(&output.written_text(), &mut clipboard).unwrap();

        let displayed = String::from_utf8(output.get_ref().clone()).unwrap();
        (displayed, clipboard.content)
    }

    #[test_case(&["a|JShCVEMqIiAg"] => "a|42\n" ; "missing final newline")]
    #[test_case(&["a|JShCVEMqIiAg\n"] => "a|42\n" ; "final newline")]
    #[test_case(&["a|JShCVEMqIiAg\n", "b|JShCVEMqIiAg\n"] => "a|42\nb|42\n" ; "two sources with newlines")]
    #[test_case(&["a|JShCVEMqIiAg", "b|JShCVEMqIiAg"] => "a|42\nb|42\n" ; "two sources without newlines")]
    #[test_case(&["", "b|JShCVEMqIiAg\n"] => "b|42\n" ; "empty source first")]
    fn test_clipboard_gets_what_is_displayed(inputs: &[&str]) -> String {
        let (displayed, copied) = display_and_copy(inputs);
        assert_eq!(copied, displayed);
        displayed
    }

    #[test]
    fn test_streamed_source_is_mirrored() {
        let mut output = MirroredOutput::new(Vec::new());
        let mut decoder = LineDecoder::new(DecodeOptions::default());
        decode_stream(Cursor::new("a|JShCVEMqIiAg"), &mut output, &mut decoder).unwrap();
        output.end_source().unwrap();
        output.write_rendered("plain").unwrap();

        assert_eq!(output.written(), b"a|42\nplain\n");
        assert_eq!(output.get_ref().as_slice(), output.written());
    }
}
