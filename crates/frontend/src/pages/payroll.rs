//! Payroll page: preview panel and payslip modal.

use crate::shared::dom::{DomNode, DomRoot, Selector};

const HIDDEN: &str = "hidden";

struct PayslipModal<N> {
    modal: N,
    name: N,
    gross: N,
    deductions: N,
    net: N,
}

pub struct PayrollPanel<N: DomNode> {
    toggle: Option<N>,
    preview: Option<N>,
    payslip: Option<PayslipModal<N>>,
}

impl<N: DomNode> PayrollPanel<N> {
    pub fn resolve<R: DomRoot<Node = N>>(root: &R) -> Option<Self> {
        let payslip = (|| {
            Some(PayslipModal {
                modal: root.by_id("payslipModal")?,
                name: root.by_id("modalEmployeeName")?,
                gross: root.by_id("modalGross")?,
                deductions: root.by_id("modalDeductions")?,
                net: root.by_id("modalNet")?,
            })
        })();
        let panel = Self {
            toggle: root.by_id("togglePayrollBtn"),
            preview: root.by_id("payrollPreview"),
            payslip,
        };
        if panel.toggle.is_none() && panel.payslip.is_none() {
            return None;
        }
        Some(panel)
    }

    pub fn preview_toggle(&self) -> Option<&N> {
        self.toggle.as_ref()
    }

    /// Close buttons inside the payslip modal.
    pub fn close_buttons(&self) -> Vec<N> {
        self.payslip
            .as_ref()
            .map(|p| p.modal.select_all(&Selector::class("close")))
            .unwrap_or_default()
    }

    pub fn toggle_preview(&self) {
        if let Some(preview) = &self.preview {
            preview.toggle_class(HIDDEN, !preview.has_class(HIDDEN));
        }
    }

    /// Fill the modal from the row of a `.btn-view-payslip` button and show it.
    pub fn open_payslip(&self, button: &N) -> bool {
        let Some(payslip) = &self.payslip else {
            return false;
        };
        let Some(row) = button.closest(&Selector::tag("tr")) else {
            log::warn!("payslip button outside a table row");
            return false;
        };
        let cells: Vec<String> = row
            .children()
            .iter()
            .map(|cell| cell.text().trim().to_string())
            .collect();
        if cells.len() < 5 {
            log::warn!("payslip row has {} cells, expected 5", cells.len());
            return false;
        }
        payslip.name.set_text(&cells[0]);
        payslip.gross.set_text(&cells[2]);
        payslip.deductions.set_text(&cells[3]);
        payslip.net.set_text(&cells[4]);
        payslip.modal.remove_class(HIDDEN);
        true
    }

    pub fn close_payslip(&self) {
        if let Some(payslip) = &self.payslip {
            payslip.modal.add_class(HIDDEN);
        }
    }
}
