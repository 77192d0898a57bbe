//! Card/table view switch.
//!
//! Two states, [`ViewMode::Card`] and [`ViewMode::Table`]. Every transition
//! shows the active container, hides the other from sight and from assistive
//! technology, marks the matching control and, when the page persists its
//! choice, writes it to the preference store.

use super::registry::{HideStyle, ResolvedControls, ViewBinding};
use crate::shared::dom::DomNode;
use crate::shared::storage::PreferenceStore;
use contracts::shared::view_mode::ViewMode;
use std::cell::Cell;

const HIDDEN_CLASS: &str = "hidden";
const ACTIVE_CLASS: &str = "active";

pub struct ViewSwitch<N: DomNode, S: PreferenceStore> {
    binding: ViewBinding<N>,
    store: S,
    mode: Cell<ViewMode>,
}

impl<N: DomNode, S: PreferenceStore> ViewSwitch<N, S> {
    /// Restore the stored view (cards if none) and render it.
    pub fn init(binding: ViewBinding<N>, store: S) -> Self {
        let initial = match binding.persistence_key {
            Some(key) => ViewMode::restore(store.get(key).as_deref()),
            None => ViewMode::default(),
        };
        let switch = Self {
            binding,
            store,
            mode: Cell::new(initial),
        };
        switch.render(initial);
        switch
    }

    pub fn mode(&self) -> ViewMode {
        self.mode.get()
    }

    pub fn binding(&self) -> &ViewBinding<N> {
        &self.binding
    }

    pub fn show(&self, mode: ViewMode) {
        self.mode.set(mode);
        self.render(mode);
        if let Some(key) = self.binding.persistence_key {
            self.store.set(key, mode.as_str());
        }
        log::debug!("view switched to {}", mode.as_str());
    }

    pub fn toggle(&self) {
        self.show(self.mode().toggled());
    }

    fn render(&self, mode: ViewMode) {
        let (active, inactive) = match mode {
            ViewMode::Card => (&self.binding.card_container, &self.binding.table_container),
            ViewMode::Table => (&self.binding.table_container, &self.binding.card_container),
        };

        match self.binding.hide {
            HideStyle::Display => {
                active.set_style("display", "block");
                inactive.set_style("display", "none");
            }
            HideStyle::HiddenClass => {
                active.remove_class(HIDDEN_CLASS);
                inactive.add_class(HIDDEN_CLASS);
            }
        }
        active.set_attr("aria-hidden", "false");
        inactive.set_attr("aria-hidden", "true");

        match &self.binding.controls {
            ResolvedControls::Pair { card, table } => {
                card.toggle_class(ACTIVE_CLASS, mode == ViewMode::Card);
                table.toggle_class(ACTIVE_CLASS, mode == ViewMode::Table);
            }
            ResolvedControls::Single { toggle } => {
                toggle.clear();
                if let Some(icon) = toggle.append("i") {
                    icon.set_class_name(mode.switch_icon());
                }
                toggle.append_text(&format!(" {}", mode.switch_label()));
            }
        }
    }
}
