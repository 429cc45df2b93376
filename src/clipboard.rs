//! Clipboard capability used by the click handlers
//!
//! Handlers only see [`ClipboardSink`], so tests can swap in a recording fake
//! instead of the platform clipboard.

/// A write-only text clipboard
pub trait ClipboardSink {
    /// Whether a clipboard can be written from this context right now
    fn is_available(&self) -> bool;

    /// Start writing `text` to the clipboard. Completion is not reported.
    fn write_text(&self, text: &str);
}

#[cfg(target_arch = "wasm32")]
pub use web::NavigatorClipboard;

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::JsValue;

    use super::ClipboardSink;

    /// `navigator.clipboard`, looked up on every call
    ///
    /// The property is missing outside secure contexts, so presence is
    /// checked through `Reflect` rather than assumed by the typed binding.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct NavigatorClipboard;

    impl NavigatorClipboard {
        fn navigator() -> Option<web_sys::Navigator> {
            web_sys::window().map(|w| w.navigator())
        }
    }

    impl ClipboardSink for NavigatorClipboard {
        fn is_available(&self) -> bool {
            let Some(navigator) = Self::navigator() else {
                return false;
            };
            match js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard")) {
                Ok(value) => !value.is_undefined() && !value.is_null(),
                Err(_) => false,
            }
        }

        fn write_text(&self, text: &str) {
            if let Some(navigator) = Self::navigator() {
                // Rejections (permission denied etc.) are left to the host
                let _ = navigator.clipboard().write_text(text);
            }
        }
    }
}
