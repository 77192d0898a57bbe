//! Row/card state updater for attendance records.
//!
//! A record can appear as a card and as a table row at the same time; both
//! are tagged with the same id attribute and are updated together.

use super::registry::RecordStateDescriptor;
use crate::shared::dom::{DomNode, DomRoot, Selector};
use contracts::domain::attendance::{hours_label, AttendanceState};

const CHECK_IN: &str = "btn-checkin";
const CHECK_OUT: &str = "btn-checkout";

pub struct RecordStateUpdater<R: DomRoot> {
    root: R,
    id_attr: &'static str,
}

impl<R: DomRoot> RecordStateUpdater<R> {
    pub fn new(root: R, descriptor: &RecordStateDescriptor) -> Self {
        Self {
            root,
            id_attr: descriptor.id_attr,
        }
    }

    /// Apply `state` to every node tagged with `record_id`. Idempotent.
    /// Returns the number of nodes touched.
    pub fn set_record_status(
        &self,
        record_id: &str,
        state: AttendanceState,
        hours: Option<f32>,
    ) -> usize {
        let nodes = self
            .root
            .select_all(&Selector::attr_eq(self.id_attr, record_id));
        for node in &nodes {
            apply_state(node, state, hours);
        }
        log::debug!(
            "{} -> {} ({} nodes)",
            record_id,
            state.as_str(),
            nodes.len()
        );
        nodes.len()
    }

    /// Map a click target inside a check-in/check-out control to the record
    /// and the state it requests.
    /// Record id, new state and hours (`data-hours` on the control) for a
    /// check-in/out click.
    pub fn resolve_click(&self, target: &R::Node) -> Option<(String, AttendanceState, Option<f32>)> {
        let (control, state) = if let Some(c) = target.closest(&Selector::class(CHECK_IN)) {
            (c, AttendanceState::CheckedIn)
        } else if let Some(c) = target.closest(&Selector::class(CHECK_OUT)) {
            (c, AttendanceState::CheckedOut)
        } else {
            return None;
        };
        let record = control.closest(&Selector::attr(self.id_attr))?;
        let hours = control.attr("data-hours").and_then(|h| h.trim().parse().ok());
        Some((record.attr(self.id_attr)?, state, hours))
    }
}

fn apply_state<N: DomNode>(node: &N, state: AttendanceState, hours: Option<f32>) {
    let row = node.closest(&Selector::tag("tr"));
    let find = |class: &str| {
        let selector = Selector::class(class);
        node.select(&selector)
            .or_else(|| row.as_ref().and_then(|r| r.select(&selector)))
    };

    if let Some(status) = node
        .select(&Selector::class("status1"))
        .or_else(|| node.select(&Selector::class("status")))
    {
        status.set_text(state.label());
        status.set_style("color", state.color());
    }

    if let Some(check_in) = find(CHECK_IN) {
        check_in.set_disabled(!state.check_in_enabled());
    }
    if let Some(check_out) = find(CHECK_OUT) {
        check_out.set_disabled(!state.check_out_enabled());
    }

    if let (Some(label), Some(cell)) = (hours_label(hours), find("hours-worked")) {
        cell.set_text(&label);
    }
}
