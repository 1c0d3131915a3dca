// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use copypasta_ext::{copypasta::ClipboardProvider, x11_fork::ClipboardContext};
use std::error::Error;

pub type ClipboardResult<T> = Result<T, Box<dyn Error + Send + Sync + 'static>>;

/// Abstraction for the clipboard service for dependency injection. This trait is
/// implemented by both a test clipboard service and a system clipboard service.
pub trait ClipboardService {
    fn try_to_put_content_into_clipboard(
        &mut self,
        content: String,
    ) -> ClipboardResult<()>;
    fn try_to_get_content_from_clipboard(&mut self) -> ClipboardResult<String>;
}

#[derive(Debug)]
pub struct SystemClipboard;

impl ClipboardService for SystemClipboard {
    fn try_to_put_content_into_clipboard(
        &mut self,
        content: String,
    ) -> ClipboardResult<()> {
        let mut ctx = ClipboardContext::new()?;
        let len = content.len();
        ctx.set_contents(content)?;

        // % is Display, ? is Debug.
        tracing::debug!(message = "📋 Decoded output was copied to clipboard", bytes = %len);
        Ok(())
    }

    fn try_to_get_content_from_clipboard(&mut self) -> ClipboardResult<String> {
        let mut ctx = ClipboardContext::new()?;
        let content = ctx.get_contents()?;

        Ok(content)
    }
}

/// Put `content` on the clipboard exactly as it is displayed.
///
/// # Errors
///
/// Returns an error if the clipboard is not available, eg there's no display server.
pub fn copy_to_clipboard(
    content: &str,
    clipboard_service_provider: &mut impl ClipboardService,
) -> miette::Result<()> {
    clipboard_service_provider
        .try_to_put_content_into_clipboard(content.to_string())
        .map_err(|error| miette::miette!("Could not copy to clipboard: {error}"))
}

pub mod clipboard_test_fixtures {
    use super::{ClipboardResult, ClipboardService};

    #[derive(Debug, Default)]
    pub struct TestClipboard {
        pub content: String,
    }

    impl ClipboardService for TestClipboard {
        fn try_to_put_content_into_clipboard(
            &mut self,
            content: String,
        ) -> ClipboardResult<()> {
            self.content = content;
            Ok(())
        }

        fn try_to_get_content_from_clipboard(&mut self) -> ClipboardResult<String> {
            Ok(self.content.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{clipboard_test_fixtures::TestClipboard, *};
    use crate::hash_decode::{DecodeOptions, decode_text};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_copy_is_byte_for_byte() {
        let rendered = decode_text("id|JShCVEMqIiAg\n\nplain", &DecodeOptions::default())
            .render();
        let mut clipboard = TestClipboard::default();

        copy_to_clipboard(&rendered, &mut clipboard).unwrap();

        assert_eq!(
            clipboard.try_to_get_content_from_clipboard().unwrap(),
            "id|42\n\nplain"
        );
    }
}
