//! Presentation registry.
//!
//! A [`PageDescriptor`] declares, by element id and selector, which containers
//! show the same record set and which controls drive them. Resolving it
//! against the document yields a [`PageRegistry`] whose bindings are `None`
//! wherever the page lacks the markup, so features switch off without failing
//! the page.

use crate::shared::dom::{DomNode, DomRoot, Selector};
use contracts::shared::filter::RecordFields;

/// How a container is hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HideStyle {
    /// Inline `display: block` / `display: none`.
    Display,
    /// Toggle the `hidden` class.
    HiddenClass,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewControls {
    /// One button per view.
    Pair {
        card: &'static str,
        table: &'static str,
    },
    /// One button flipping between views.
    Single { toggle: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewDescriptor {
    pub card_container: &'static str,
    pub table_container: &'static str,
    pub controls: ViewControls,
    pub hide: HideStyle,
    /// Preference key the active view is stored under, if persisted.
    pub persistence_key: Option<&'static str>,
    /// Also switch on Enter pressed over a control.
    pub keyboard: bool,
}

/// Where a record's display name comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameSource {
    Attr(&'static str),
    /// Text of the first child cell (plain table rows).
    FirstCell,
}

/// How to read a record's searchable fields from one of its nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordShape {
    pub id_attr: Option<&'static str>,
    pub name: NameSource,
    pub category_attr: Option<&'static str>,
}

impl RecordShape {
    pub fn read<N: DomNode>(&self, node: &N) -> RecordFields {
        let attr = |name: Option<&'static str>| {
            name.and_then(|n| node.attr(n)).unwrap_or_default()
        };
        let name = match &self.name {
            NameSource::Attr(n) => node.attr(n).unwrap_or_default(),
            NameSource::FirstCell => node
                .children()
                .first()
                .map(|cell| cell.text().trim().to_string())
                .unwrap_or_default(),
        };
        RecordFields {
            id: attr(self.id_attr),
            name,
            category: attr(self.category_attr),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterTrigger {
    /// Every edit of the search box.
    Input,
    /// Key release in the search box.
    KeyUp,
}

/// A container and the selector of its record nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordListing {
    pub container: &'static str,
    pub item: Selector,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterDescriptor {
    pub listings: Vec<RecordListing>,
    pub search_input: Option<&'static str>,
    pub category_select: Option<&'static str>,
    pub shape: RecordShape,
    pub trigger: FilterTrigger,
}

/// Attendance rows/cards whose check-in state can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordStateDescriptor {
    pub id_attr: &'static str,
}

/// Records carrying server-confirmed action buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionDescriptor {
    pub id_attr: &'static str,
    pub trigger: Selector,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDescriptor {
    pub name: &'static str,
    pub view: Option<ViewDescriptor>,
    pub filter: Option<FilterDescriptor>,
    pub records: Option<RecordStateDescriptor>,
    pub actions: Option<ActionDescriptor>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedControls<N> {
    Pair { card: N, table: N },
    Single { toggle: N },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewBinding<N> {
    pub card_container: N,
    pub table_container: N,
    pub controls: ResolvedControls<N>,
    pub hide: HideStyle,
    pub persistence_key: Option<&'static str>,
    pub keyboard: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterBinding<N> {
    pub listings: Vec<(N, Selector)>,
    pub search_input: Option<N>,
    pub category_select: Option<N>,
    pub shape: RecordShape,
    pub trigger: FilterTrigger,
}

/// Resolved, immutable view of one descriptor against the current document.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRegistry<N> {
    pub name: &'static str,
    pub view: Option<ViewBinding<N>>,
    pub filter: Option<FilterBinding<N>>,
    pub records: Option<RecordStateDescriptor>,
    pub actions: Option<ActionDescriptor>,
}

impl<N> PageRegistry<N> {
    pub fn is_empty(&self) -> bool {
        self.view.is_none()
            && self.filter.is_none()
            && self.records.is_none()
            && self.actions.is_none()
    }
}

impl PageDescriptor {
    pub fn resolve<R: DomRoot>(&self, root: &R) -> PageRegistry<R::Node> {
        PageRegistry {
            name: self.name,
            view: self.view.as_ref().and_then(|v| v.resolve(self.name, root)),
            filter: self.filter.as_ref().and_then(|f| f.resolve(self.name, root)),
            records: self.records.clone().filter(|r| {
                !root.select_all(&Selector::attr(r.id_attr)).is_empty()
            }),
            actions: self.actions.clone().filter(|a| {
                !root.select_all(&a.trigger).is_empty()
            }),
        }
    }
}

impl ViewDescriptor {
    fn resolve<R: DomRoot>(&self, page: &str, root: &R) -> Option<ViewBinding<R::Node>> {
        let mut ids = vec![self.card_container, self.table_container];
        match &self.controls {
            ViewControls::Pair { card, table } => ids.extend([*card, *table]),
            ViewControls::Single { toggle } => ids.push(*toggle),
        }
        let found = lookup_all(page, root, &ids)?;

        let controls = match found.as_slice() {
            [_, _, card, table] => ResolvedControls::Pair {
                card: card.clone(),
                table: table.clone(),
            },
            [_, _, toggle] => ResolvedControls::Single {
                toggle: toggle.clone(),
            },
            _ => return None,
        };
        let mut found = found.into_iter();
        Some(ViewBinding {
            card_container: found.next()?,
            table_container: found.next()?,
            controls,
            hide: self.hide,
            persistence_key: self.persistence_key,
            keyboard: self.keyboard,
        })
    }
}

impl FilterDescriptor {
    fn resolve<R: DomRoot>(&self, page: &str, root: &R) -> Option<FilterBinding<R::Node>> {
        let search_input = self.search_input.and_then(|id| root.by_id(id));
        let category_select = self.category_select.and_then(|id| root.by_id(id));
        let listings: Vec<_> = self
            .listings
            .iter()
            .filter_map(|l| root.by_id(l.container).map(|node| (node, l.item.clone())))
            .collect();

        let has_control = search_input.is_some() || category_select.is_some();
        if !has_control || listings.is_empty() {
            if has_control || !listings.is_empty() {
                log::warn!("{}: filter markup incomplete, filtering disabled", page);
            }
            return None;
        }
        if listings.len() < self.listings.len() {
            log::warn!("{}: some record containers are missing", page);
        }

        Some(FilterBinding {
            listings,
            search_input,
            category_select,
            shape: self.shape.clone(),
            trigger: self.trigger,
        })
    }
}

/// All-or-nothing id lookup. Warns only when the markup is partially present.
fn lookup_all<R: DomRoot>(page: &str, root: &R, ids: &[&str]) -> Option<Vec<R::Node>> {
    let found: Vec<Option<R::Node>> = ids.iter().map(|id| root.by_id(id)).collect();
    let missing: Vec<&str> = ids
        .iter()
        .zip(&found)
        .filter(|(_, node)| node.is_none())
        .map(|(id, _)| *id)
        .collect();

    if missing.is_empty() {
        return found.into_iter().collect();
    }
    if missing.len() < ids.len() {
        log::warn!("{}: missing #{}, view switch disabled", page, missing.join(", #"));
    }
    None
}
