//! Browser implementation of the DOM traits over `web_sys`.

use super::{DomNode, DomRoot, Selector};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlDocument, HtmlElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement,
};

#[derive(Debug, Clone, PartialEq)]
pub struct WebNode(pub Element);

impl WebNode {
    /// The element an event was dispatched to, if it is an element.
    pub fn from_event(event: &Event) -> Option<Self> {
        event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .map(WebNode)
    }

    pub fn as_html(&self) -> Option<&HtmlElement> {
        self.0.dyn_ref::<HtmlElement>()
    }
}

impl DomNode for WebNode {
    fn tag(&self) -> String {
        self.0.tag_name().to_lowercase()
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attr(&self, name: &str, value: &str) {
        let _ = self.0.set_attribute(name, value);
    }

    fn remove_attr(&self, name: &str) {
        let _ = self.0.remove_attribute(name);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn toggle_class(&self, class: &str, on: bool) {
        let list = self.0.class_list();
        let _ = if on { list.add_1(class) } else { list.remove_1(class) };
    }

    fn set_class_name(&self, classes: &str) {
        self.0.set_class_name(classes);
    }

    fn text(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn offset_width(&self) -> i32 {
        self.as_html().map(|el| el.offset_width()).unwrap_or(0)
    }

    fn style(&self, property: &str) -> String {
        self.as_html()
            .and_then(|el| el.style().get_property_value(property).ok())
            .unwrap_or_default()
    }

    fn set_style(&self, property: &str, value: &str) {
        let Some(el) = self.as_html() else {
            return;
        };
        let style = el.style();
        if value.is_empty() {
            let _ = style.remove_property(property);
        } else {
            let _ = style.set_property(property, value);
        }
    }

    fn value(&self) -> String {
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(select) = self.0.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else if let Some(area) = self.0.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn set_value(&self, value: &str) {
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(select) = self.0.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        } else if let Some(area) = self.0.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        }
    }

    fn select_all(&self, selector: &Selector) -> Vec<Self> {
        let Ok(list) = self.0.query_selector_all(&selector.to_css()) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(WebNode)
            .collect()
    }

    fn closest(&self, selector: &Selector) -> Option<Self> {
        self.0.closest(&selector.to_css()).ok().flatten().map(WebNode)
    }

    fn children(&self) -> Vec<Self> {
        let collection = self.0.children();
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .map(WebNode)
            .collect()
    }

    fn append(&self, tag: &str) -> Option<Self> {
        let document = self.0.owner_document()?;
        let child = document.create_element(tag).ok()?;
        self.0.append_child(&child).ok()?;
        Some(WebNode(child))
    }

    fn append_text(&self, text: &str) {
        if let Some(document) = self.0.owner_document() {
            let node = document.create_text_node(text);
            let _ = self.0.append_child(&node);
        }
    }

    fn clear(&self) {
        self.0.set_inner_html("");
    }

    fn remove(&self) {
        self.0.remove();
    }

    fn contains(&self, other: &Self) -> bool {
        self.0.contains(Some(&*other.0))
    }
}

#[derive(Debug, Clone)]
pub struct WebDocument(pub Document);

impl WebDocument {
    pub fn current() -> Option<Self> {
        web_sys::window().and_then(|w| w.document()).map(WebDocument)
    }

    /// Raw `document.cookie` string.
    pub fn cookie(&self) -> String {
        self.0
            .dyn_ref::<HtmlDocument>()
            .and_then(|doc| doc.cookie().ok())
            .unwrap_or_default()
    }

    pub fn on<E>(&self, event: &str, handler: impl FnMut(E) + 'static)
    where
        E: JsCast + 'static,
    {
        listen(self.0.as_ref(), event, handler);
    }
}

impl DomRoot for WebDocument {
    type Node = WebNode;

    fn by_id(&self, id: &str) -> Option<WebNode> {
        self.0.get_element_by_id(id).map(WebNode)
    }

    fn select_all(&self, selector: &Selector) -> Vec<WebNode> {
        let Ok(list) = self.0.query_selector_all(&selector.to_css()) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(WebNode)
            .collect()
    }
}

/// Attach a listener for the lifetime of the page.
///
/// Events that are not of type `E` are dropped.
pub fn listen<E>(target: &EventTarget, event: &str, mut handler: impl FnMut(E) + 'static)
where
    E: JsCast + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(Event)>);

    let _ = target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref::<js_sys::Function>());
    closure.forget();
}
