//! Browser DOM host for the binder

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use crate::binder::{ClickHandler, CodeBlock, CodeBlockHost};
use crate::error::{BindError, BindResult};

/// The current page's document
pub struct WebDocument {
    document: Document,
    container_selector: Rc<str>,
}

impl WebDocument {
    pub fn new(document: Document, container_selector: &str) -> Self {
        Self {
            document,
            container_selector: Rc::from(container_selector),
        }
    }

    /// `window.document`
    pub fn current(container_selector: &str) -> BindResult<Self> {
        let window = web_sys::window().ok_or(BindError::NoWindow)?;
        let document = window.document().ok_or(BindError::NoDocument)?;
        Ok(Self::new(document, container_selector))
    }
}

/// A `<code>` element and the selector for its container
#[derive(Clone)]
pub struct WebCodeBlock {
    element: Element,
    container_selector: Rc<str>,
}

impl CodeBlock for WebCodeBlock {
    fn container_text(&self) -> Option<String> {
        match self.element.closest(&self.container_selector) {
            Ok(container) => container.and_then(|pre| pre.text_content()),
            Err(e) => {
                log::warn!("Container lookup failed: {:?}", e);
                None
            }
        }
    }
}

/// Click listener attached to one element; removed again on drop
pub struct WebListener {
    target: Element,
    closure: Closure<dyn FnMut(Event)>,
}

impl Drop for WebListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback("click", self.closure.as_ref().unchecked_ref())
        {
            log::warn!("Failed to remove click listener: {:?}", e);
        }
    }
}

impl CodeBlockHost for WebDocument {
    type Block = WebCodeBlock;
    type Listener = WebListener;

    fn code_blocks(&self, selector: &str) -> BindResult<Vec<WebCodeBlock>> {
        // querySelectorAll returns a static NodeList
        let nodes = self
            .document
            .query_selector_all(selector)
            .map_err(|e| BindError::InvalidSelector {
                selector: selector.to_string(),
                message: format!("{:?}", e),
            })?;

        let blocks = (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|element| WebCodeBlock {
                element,
                container_selector: self.container_selector.clone(),
            })
            .collect();
        Ok(blocks)
    }

    fn on_click(&self, block: &WebCodeBlock, mut handler: ClickHandler) -> BindResult<WebListener> {
        let closure = Closure::wrap(Box::new(move |_: Event| handler()) as Box<dyn FnMut(Event)>);

        block
            .element
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(|e| BindError::Listener(format!("{:?}", e)))?;

        Ok(WebListener {
            target: block.element.clone(),
            closure,
        })
    }
}
