//! Copy-on-click binding for rendered code blocks
//!
//! The binder takes a snapshot of the code elements present when it runs and
//! gives each one a click handler that copies the full text of the element's
//! preformatted container. It is written against [`CodeBlockHost`] so the same
//! logic drives the browser DOM and the in-memory host used by the tests.

use std::rc::Rc;

use crate::clipboard::ClipboardSink;
use crate::config::BinderConfig;
use crate::error::BindResult;

/// A code element that can be clicked
pub trait CodeBlock {
    /// Full text of the enclosing preformatted container.
    /// `None` when the element has no such container.
    fn container_text(&self) -> Option<String>;
}

/// Click handler installed on a code element
pub type ClickHandler = Box<dyn FnMut()>;

/// Where code elements come from and how clicks are delivered
pub trait CodeBlockHost {
    type Block: CodeBlock + Clone + 'static;
    /// Keeps a handler attached while alive; dropping it detaches the handler
    type Listener;

    /// Code elements matching `selector`, as a static snapshot
    fn code_blocks(&self, selector: &str) -> BindResult<Vec<Self::Block>>;

    /// Attach `handler` to `block`'s click event
    fn on_click(&self, block: &Self::Block, handler: ClickHandler) -> BindResult<Self::Listener>;
}

/// What a single click did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Text handed to the clipboard (length in bytes)
    Copied { bytes: usize },
    /// No clipboard in this context; nothing happened
    ClipboardUnavailable,
    /// Element had no preformatted container; nothing copied
    NoContainer,
}

/// Copy `block`'s container text to `clipboard` if one is available
pub fn copy_block<B: CodeBlock + ?Sized>(block: &B, clipboard: &dyn ClipboardSink) -> CopyOutcome {
    if !clipboard.is_available() {
        return CopyOutcome::ClipboardUnavailable;
    }

    match block.container_text() {
        Some(text) => {
            clipboard.write_text(&text);
            CopyOutcome::Copied { bytes: text.len() }
        }
        None => CopyOutcome::NoContainer,
    }
}

/// Handlers installed by one [`bind`] pass
///
/// Dropping this detaches every handler it owns.
pub struct Bindings<L> {
    listeners: Vec<L>,
}

impl<L> Bindings<L> {
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<L> std::fmt::Debug for Bindings<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bindings").field("listeners", &self.listeners.len()).finish()
    }
}

/// Attach one copy handler to every code element currently in `host`
///
/// Elements added afterwards are not wired. Each handler captures only its own
/// element and the shared clipboard.
pub fn bind<H: CodeBlockHost>(
    host: &H,
    config: &BinderConfig,
    clipboard: Rc<dyn ClipboardSink>,
) -> BindResult<Bindings<H::Listener>> {
    let blocks = host.code_blocks(&config.code_selector)?;
    let mut listeners = Vec::with_capacity(blocks.len());

    for block in blocks {
        let handler_block = block.clone();
        let clipboard = clipboard.clone();
        let handler: ClickHandler = Box::new(move || {
            match copy_block(&handler_block, &*clipboard) {
                CopyOutcome::Copied { bytes } => log::debug!("Copied {} bytes of code", bytes),
                CopyOutcome::ClipboardUnavailable => log::debug!("Clipboard unavailable, skipping copy"),
                CopyOutcome::NoContainer => log::debug!("Code element has no container, skipping copy"),
            }
        });
        listeners.push(host.on_click(&block, handler)?);
    }

    log::info!("Bound copy handlers to {} code blocks", listeners.len());
    Ok(Bindings { listeners })
}


#[cfg(test)]
mod tests {
    use super::testing::{FakeClipboard, FakeHost};
    use super::*;
    use crate::error::BindError;

    fn bind_default(host: &FakeHost, clipboard: &Rc<FakeClipboard>) -> Bindings<testing::FakeListener> {
        let sink: Rc<dyn ClipboardSink> = clipboard.clone();
        bind(host, &BinderConfig::default(), sink).unwrap()
    }

    #[test]
    fn test_every_block_gets_exactly_one_handler() {
        let host = FakeHost::default();
        let blocks: Vec<_> = (0..5).map(|i| host.add_block(&format!("line {}\n", i))).collect();
        let clipboard = FakeClipboard::new(true);

        let bindings = bind_default(&host, &clipboard);

        assert_eq!(bindings.len(), 5);
        assert!(blocks.iter().all(|b| b.handler_count() == 1));
    }

    #[test]
    fn test_empty_document_binds_nothing() {
        let host = FakeHost::default();
        let clipboard = FakeClipboard::new(true);

        let bindings = bind_default(&host, &clipboard);

        assert!(bindings.is_empty());
    }

    #[test]
    fn test_click_copies_container_text_verbatim() {
        let host = FakeHost::default();
        let block = host.add_block("print(\"hi\")\n");
        let clipboard = FakeClipboard::new(true);
        let _bindings = bind_default(&host, &clipboard);

        block.click();

        assert_eq!(clipboard.contents().as_deref(), Some("print(\"hi\")\n"));
        assert_eq!(clipboard.writes().len(), 1);
    }

    #[test]
    fn test_whitespace_is_preserved() {
        let host = FakeHost::default();
        let text = "  fn main() {\n\t\tlet x = 1;\r\n  }\n\n";
        let block = host.add_block(text);
        let clipboard = FakeClipboard::new(true);
        let _bindings = bind_default(&host, &clipboard);

        block.click();

        assert_eq!(clipboard.contents().unwrap().as_bytes(), text.as_bytes());
    }

    #[test]
    fn test_click_without_clipboard_is_silent() {
        let host = FakeHost::default();
        let block = host.add_block("ls -la\n");
        let clipboard = FakeClipboard::new(false);
        let _bindings = bind_default(&host, &clipboard);

        block.click();

        assert!(clipboard.writes().is_empty());
    }

    #[test]
    fn test_capability_checked_at_click_time() {
        let host = FakeHost::default();
        let block = host.add_block("cargo build\n");
        let clipboard = FakeClipboard::new(false);
        let _bindings = bind_default(&host, &clipboard);

        block.click();
        clipboard.set_available(true);
        block.click();

        assert_eq!(clipboard.writes(), vec!["cargo build\n".to_string()]);
    }

    #[test]
    fn test_blocks_added_after_bind_are_not_wired() {
        let host = FakeHost::default();
        host.add_block("first\n");
        let clipboard = FakeClipboard::new(true);
        let bindings = bind_default(&host, &clipboard);

        let late = host.add_block("late\n");
        late.click();

        assert_eq!(bindings.len(), 1);
        assert_eq!(late.handler_count(), 0);
        assert!(clipboard.writes().is_empty());
    }

    #[test]
    fn test_each_block_copies_only_its_own_text() {
        let host = FakeHost::default();
        let rust = host.add_block("let a = 1;\n");
        let shell = host.add_block("echo hello\n");
        let clipboard = FakeClipboard::new(true);
        let _bindings = bind_default(&host, &clipboard);

        shell.click();
        assert_eq!(clipboard.contents().as_deref(), Some("echo hello\n"));

        rust.click();
        assert_eq!(clipboard.contents().as_deref(), Some("let a = 1;\n"));

        assert_eq!(clipboard.writes(), vec!["echo hello\n".to_string(), "let a = 1;\n".to_string()]);
    }

    #[test]
    fn test_block_without_container_copies_nothing() {
        let host = FakeHost::default();
        let bare = host.add_bare_block();
        let clipboard = FakeClipboard::new(true);
        let _bindings = bind_default(&host, &clipboard);

        bare.click();

        assert!(clipboard.writes().is_empty());
        assert_eq!(copy_block(&bare, &*clipboard), CopyOutcome::NoContainer);
    }

    #[test]
    fn test_copy_block_outcomes() {
        let host = FakeHost::default();
        let block = host.add_block("abc");

        let available = FakeClipboard::new(true);
        assert_eq!(copy_block(&block, &*available), CopyOutcome::Copied { bytes: 3 });

        let missing = FakeClipboard::new(false);
        assert_eq!(copy_block(&block, &*missing), CopyOutcome::ClipboardUnavailable);
    }

    #[test]
    fn test_dropping_bindings_detaches_handlers() {
        let host = FakeHost::default();
        let block = host.add_block("x\n");
        let clipboard = FakeClipboard::new(true);

        let bindings = bind_default(&host, &clipboard);
        assert_eq!(block.handler_count(), 1);
        drop(bindings);

        assert_eq!(block.handler_count(), 0);
        block.click();
        assert!(clipboard.writes().is_empty());
    }

    #[test]
    fn test_rebind_after_release_keeps_one_handler() {
        let host = FakeHost::default();
        let block = host.add_block("y\n");
        let clipboard = FakeClipboard::new(true);

        let first = bind_default(&host, &clipboard);
        drop(first);
        let _second = bind_default(&host, &clipboard);

        assert_eq!(block.handler_count(), 1);
        block.click();
        assert_eq!(clipboard.writes().len(), 1);
    }

    #[test]
    fn test_selector_is_taken_from_config() {
        let host = FakeHost::default();
        host.add_block("z\n");
        let config = BinderConfig {
            code_selector: ".highlight code".to_string(),
            ..Default::default()
        };

        let bindings = bind(&host, &config, FakeClipboard::new(true)).unwrap();

        assert!(bindings.is_empty());
    }

    #[test]
    fn test_host_selector_error_propagates() {
        let host = FakeHost::default();
        let config = BinderConfig {
            code_selector: "pre >>> code".to_string(),
            ..Default::default()
        };

        let err = bind(&host, &config, FakeClipboard::new(true)).unwrap_err();

        assert!(matches!(err, BindError::InvalidSelector { .. }));
    }
}
