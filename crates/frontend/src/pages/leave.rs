//! Leave application form: live working-day count and resumption date.

use crate::shared::dom::{DomNode, DomRoot};
use contracts::domain::leave::LeaveSummary;

pub struct LeaveForm<N: DomNode> {
    start: N,
    end: N,
    total: N,
    resumption: N,
}

impl<N: DomNode> LeaveForm<N> {
    pub fn resolve<R: DomRoot<Node = N>>(root: &R) -> Option<Self> {
        Some(Self {
            start: root.by_id("start_date")?,
            end: root.by_id("end_date")?,
            total: root.by_id("total_days_display")?,
            resumption: root.by_id("resumption_date_display")?,
        })
    }

    pub fn inputs(&self) -> [&N; 2] {
        [&self.start, &self.end]
    }

    /// Recompute from the two date inputs. Leaves both displays untouched
    /// while either date is missing or the range is inverted.
    pub fn recompute(&self) -> Option<LeaveSummary> {
        let summary = LeaveSummary::from_inputs(&self.start.value(), &self.end.value())?;
        self.total.set_text(&summary.days_label());
        self.resumption.set_text(&summary.resumption_label());
        Some(summary)
    }
}
