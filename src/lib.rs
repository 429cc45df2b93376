//! Click-to-copy for code blocks on static documentation pages
//!
//! Load the wasm module from the page and call `initCodeCopy()` once the
//! document has been parsed. Every `pre code` element present at that point
//! copies the text of its `<pre>` to the clipboard when clicked.

pub mod binder;
pub mod clipboard;
pub mod config;
pub mod error;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use binder::{bind, copy_block, Bindings, CodeBlock, CodeBlockHost, CopyOutcome};
pub use clipboard::ClipboardSink;
pub use config::BinderConfig;
pub use error::{BindError, BindResult};

#[cfg(target_arch = "wasm32")]
pub use entry::{init_code_copy, release_code_copy};

#[cfg(target_arch = "wasm32")]
mod entry {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Once;

    use wasm_bindgen::prelude::*;

    use crate::binder::{bind, Bindings};
    use crate::clipboard::NavigatorClipboard;
    use crate::config::BinderConfig;
    use crate::web::{WebDocument, WebListener};

    static LOGGER: Once = Once::new();

    // Closures aren't Send, so the live bindings stay on this thread
    thread_local! {
        static BINDINGS: RefCell<Option<Bindings<WebListener>>> = const { RefCell::new(None) };
    }

    fn init_logging(level: log::Level) {
        LOGGER.call_once(|| {
            // Better panic messages in the browser console
            console_error_panic_hook::set_once();
            wasm_logger::init(wasm_logger::Config::new(level));
        });
    }

    /// Bind copy handlers to the code blocks currently in the document
    ///
    /// Returns how many elements were bound. Calling it again replaces the
    /// previous handlers rather than stacking new ones.
    #[wasm_bindgen(js_name = initCodeCopy)]
    pub fn init_code_copy(options: JsValue) -> Result<usize, JsValue> {
        let config = BinderConfig::from_js(options)?;
        init_logging(config.level()?);

        let released = release_code_copy();
        if released > 0 {
            log::debug!("Released {} previous copy handlers", released);
        }

        let document = WebDocument::current(&config.container_selector)?;
        let bindings = bind(&document, &config, Rc::new(NavigatorClipboard))?;
        let count = bindings.len();

        BINDINGS.with(|slot| *slot.borrow_mut() = Some(bindings));
        Ok(count)
    }

    /// Detach every handler installed by `initCodeCopy`
    #[wasm_bindgen(js_name = releaseCodeCopy)]
    pub fn release_code_copy() -> usize {
        BINDINGS.with(|slot| slot.borrow_mut().take()).map_or(0, |bindings| bindings.len())
    }
}
