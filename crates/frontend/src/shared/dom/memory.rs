//! In-memory document used by unit tests.
//!
//! Nodes live in an arena shared by every handle. Text is stored in `#text`
//! child nodes so `text`/`set_text`/`append_text` behave like the browser.

use super::{DomNode, DomRoot, Selector};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

const TEXT_TAG: &str = "#text";

#[derive(Debug, Default)]
struct NodeData {
    tag: String,
    text: String,
    attrs: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    value: String,
    width: i32,
    parent: Option<usize>,
    children: Vec<usize>,
}

#[derive(Clone)]
pub struct MemoryDom {
    arena: Rc<RefCell<Vec<NodeData>>>,
}

#[derive(Clone)]
pub struct MemoryNode {
    dom: MemoryDom,
    index: usize,
}

impl MemoryDom {
    pub fn new() -> Self {
        let root = NodeData {
            tag: "html".to_string(),
            ..NodeData::default()
        };
        Self {
            arena: Rc::new(RefCell::new(vec![root])),
        }
    }

    pub fn root(&self) -> MemoryNode {
        self.node(0)
    }

    fn node(&self, index: usize) -> MemoryNode {
        MemoryNode {
            dom: self.clone(),
            index,
        }
    }

    fn push(&self, parent: usize, tag: &str, text: &str) -> usize {
        let mut arena = self.arena.borrow_mut();
        let index = arena.len();
        arena.push(NodeData {
            tag: tag.to_string(),
            text: text.to_string(),
            parent: Some(parent),
            ..NodeData::default()
        });
        arena[parent].children.push(index);
        index
    }

    fn detach(&self, index: usize) {
        let mut arena = self.arena.borrow_mut();
        if let Some(parent) = arena[index].parent.take() {
            arena[parent].children.retain(|c| *c != index);
        }
    }

    fn descendants(&self, index: usize) -> Vec<usize> {
        let arena = self.arena.borrow();
        let mut out = Vec::new();
        let mut stack: Vec<usize> = arena[index].children.iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(arena[current].children.iter().rev().copied());
        }
        out
    }

    fn matches(&self, index: usize, selector: &Selector) -> bool {
        let arena = self.arena.borrow();
        let data = &arena[index];
        data.tag != TEXT_TAG && selector.matches(&data.tag, |name| data.attrs.get(name).map(String::as_str))
    }
}

impl MemoryNode {
    /// Append an element child and return it.
    pub fn add(&self, tag: &str) -> MemoryNode {
        let index = self.dom.push(self.index, tag, "");
        self.dom.node(index)
    }

    pub fn with_id(self, id: &str) -> Self {
        self.set_attr("id", id);
        self
    }

    pub fn with_class(self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_text(self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    pub fn with_value(self, value: &str) -> Self {
        self.set_value(value);
        self
    }

    pub fn with_width(self, width: i32) -> Self {
        self.with_data_mut(|data| data.width = width);
        self
    }

    pub fn is_attached(&self) -> bool {
        let arena = self.dom.arena.borrow();
        let mut current = self.index;
        loop {
            if current == 0 {
                return true;
            }
            match arena[current].parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    fn with_data<R>(&self, f: impl FnOnce(&NodeData) -> R) -> R {
        f(&self.dom.arena.borrow()[self.index])
    }

    fn with_data_mut<R>(&self, f: impl FnOnce(&mut NodeData) -> R) -> R {
        f(&mut self.dom.arena.borrow_mut()[self.index])
    }
}

impl PartialEq for MemoryNode {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.dom.arena, &other.dom.arena) && self.index == other.index
    }
}

impl fmt::Debug for MemoryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_data(|data| write!(f, "<{} {:?}>", data.tag, data.attrs))
    }
}

impl DomNode for MemoryNode {
    fn tag(&self) -> String {
        self.with_data(|data| data.tag.clone())
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.with_data(|data| data.attrs.get(name).cloned())
    }

    fn set_attr(&self, name: &str, value: &str) {
        self.with_data_mut(|data| {
            data.attrs.insert(name.to_string(), value.to_string());
        });
    }

    fn remove_attr(&self, name: &str) {
        self.with_data_mut(|data| {
            data.attrs.remove(name);
        });
    }

    fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|list| list.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    fn toggle_class(&self, class: &str, on: bool) {
        let current = self.attr("class").unwrap_or_default();
        let mut classes: Vec<&str> = current.split_whitespace().filter(|c| *c != class).collect();
        if on {
            classes.push(class);
        }
        self.set_attr("class", &classes.join(" "));
    }

    fn set_class_name(&self, classes: &str) {
        self.set_attr("class", classes);
    }

    fn text(&self) -> String {
        let arena = self.dom.arena.borrow();
        if arena[self.index].tag == TEXT_TAG {
            return arena[self.index].text.clone();
        }
        self.dom
            .descendants(self.index)
            .into_iter()
            .filter(|i| arena[*i].tag == TEXT_TAG)
            .map(|i| arena[i].text.clone())
            .collect()
    }

    fn set_text(&self, text: &str) {
        self.clear();
        self.append_text(text);
    }

    fn offset_width(&self) -> i32 {
        self.with_data(|data| data.width)
    }

    fn style(&self, property: &str) -> String {
        self.with_data(|data| data.style.get(property).cloned().unwrap_or_default())
    }

    fn set_style(&self, property: &str, value: &str) {
        self.with_data_mut(|data| {
            if value.is_empty() {
                data.style.remove(property);
            } else {
                data.style.insert(property.to_string(), value.to_string());
            }
        });
    }

    fn value(&self) -> String {
        self.with_data(|data| data.value.clone())
    }

    fn set_value(&self, value: &str) {
        self.with_data_mut(|data| data.value = value.to_string());
    }

    fn select_all(&self, selector: &Selector) -> Vec<Self> {
        self.dom
            .descendants(self.index)
            .into_iter()
            .filter(|i| self.dom.matches(*i, selector))
            .map(|i| self.dom.node(i))
            .collect()
    }

    fn closest(&self, selector: &Selector) -> Option<Self> {
        let mut current = Some(self.index);
        while let Some(index) = current {
            if self.dom.matches(index, selector) {
                return Some(self.dom.node(index));
            }
            current = self.dom.arena.borrow()[index].parent;
        }
        None
    }

    fn children(&self) -> Vec<Self> {
        let arena = self.dom.arena.borrow();
        arena[self.index]
            .children
            .iter()
            .filter(|i| arena[**i].tag != TEXT_TAG)
            .map(|i| self.dom.node(*i))
            .collect()
    }

    fn append(&self, tag: &str) -> Option<Self> {
        Some(self.add(tag))
    }

    fn append_text(&self, text: &str) {
        self.dom.push(self.index, TEXT_TAG, text);
    }

    fn clear(&self) {
        let children = self.with_data(|data| data.children.clone());
        for child in children {
            self.dom.detach(child);
        }
    }

    fn remove(&self) {
        self.dom.detach(self.index);
    }

    fn contains(&self, other: &Self) -> bool {
        if !Rc::ptr_eq(&self.dom.arena, &other.dom.arena) {
            return false;
        }
        let mut current = Some(other.index);
        while let Some(index) = current {
            if index == self.index {
                return true;
            }
            current = self.dom.arena.borrow()[index].parent;
        }
        false
    }
}

impl DomRoot for MemoryDom {
    type Node = MemoryNode;

    fn by_id(&self, id: &str) -> Option<MemoryNode> {
        self.select(&Selector::attr_eq("id", id))
    }

    fn select_all(&self, selector: &Selector) -> Vec<MemoryNode> {
        self.root().select_all(selector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_and_children() {
        let dom = MemoryDom::new();
        let list = dom.root().add("ul").with_id("alerts");
        let item = list.add("li").with_text("Payroll due");
        item.add("button").with_class("alert-dismiss").with_text("x");

        assert_eq!(list.text(), "Payroll duex");
        assert_eq!(list.children(), vec![item.clone()]);
        assert_eq!(dom.by_id("alerts"), Some(list.clone()));

        item.remove();
        assert!(list.children().is_empty());
        assert!(dom.select(&Selector::class("alert-dismiss")).is_none());
    }

    #[test]
    fn test_closest_is_inclusive() {
        let dom = MemoryDom::new();
        let row = dom.root().add("tr").with_attr("data-emp-id", "E1");
        let button = row.add("td").add("button").with_class("btn-checkin");

        let by_attr = Selector::attr("data-emp-id");
        assert_eq!(button.closest(&by_attr), Some(row.clone()));
        assert_eq!(row.closest(&by_attr), Some(row.clone()));
        assert!(row.contains(&button));
        assert!(!button.contains(&row));
    }

    #[test]
    fn test_classes_and_style() {
        let dom = MemoryDom::new();
        let node = dom.root().add("div").with_class("card");
        node.add_class("hidden");
        node.add_class("hidden");
        assert_eq!(node.attr("class").as_deref(), Some("card hidden"));
        node.remove_class("hidden");
        assert!(!node.has_class("hidden"));

        node.set_displayed(false);
        assert!(!node.is_displayed());
        node.set_displayed(true);
        assert_eq!(node.style("display"), "");
    }
}
