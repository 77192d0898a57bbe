//! Page-load context and command routing.
//!
//! [`Dashboard::build`] resolves every page descriptor once against the
//! document and wires the components that found their markup. Browser events
//! are translated into [`Command`]s; [`Dashboard::handle`] applies them
//! synchronously and hands back the [`ActionRequest`] still to be sent, if any.

use crate::config::DashboardConfig;
use crate::pages::chrome::{dismiss_alert, Carousel, Clock, NavMenu, ProductSlider};
use crate::pages::department::{DepartmentPanel, ADD_DEPARTMENT_NOTICE};
use crate::pages::leave::LeaveForm;
use crate::pages::messages::MessageCentre;
use crate::pages::payroll::PayrollPanel;
use crate::pages::catalog;
use crate::shared::api_utils::CookieSource;
use crate::shared::date_utils::local_now;
use crate::shared::dom::{DomNode, DomRoot, Selector};
use crate::shared::notify::Notifier;
use crate::shared::storage::PreferenceStore;
use crate::sync::dispatch::{ActionDispatcher, ActionTransport};
use crate::sync::filter::RecordFilter;
use crate::sync::record_state::RecordStateUpdater;
use crate::sync::registry::{FilterTrigger, ResolvedControls};
use crate::sync::view_switch::ViewSwitch;
use contracts::domain::attendance::AttendanceState;
use contracts::domain::finance_request::ActionRequest;
use contracts::shared::view_mode::ViewMode;
use std::rc::Rc;

/// Browser-side collaborators. The notifier is shared between the action
/// dispatcher and the dashboard's own notices.
pub struct Services {
    pub transport: Box<dyn ActionTransport>,
    pub cookies: Box<dyn CookieSource>,
    pub notifier: Rc<dyn Notifier>,
}

/// Every interaction the dashboard reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum Command<N> {
    ShowView { page: usize, mode: ViewMode },
    ToggleView { page: usize },
    ApplyFilter { page: usize },
    SetAttendance {
        record_id: String,
        state: AttendanceState,
        hours: Option<f32>,
    },
    RequestAction(ActionRequest),
    ComputeLeave,
    ViewDepartment(N),
    ToggleAnalytics,
    AddDepartment,
    TogglePayrollPreview,
    OpenPayslip(N),
    ClosePayslip,
    SelectTab(N),
    SelectConversation(N),
    SendMessage,
    DismissAlert(N),
    ToggleNav(usize),
    RefreshClock,
    AdvanceCarousel,
    AdvanceSlider,
}

/// Form field events that can drive a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    Input,
    KeyUp,
    Change,
}

pub struct PageComponents<N: DomNode, S: PreferenceStore> {
    pub name: &'static str,
    pub view: Option<ViewSwitch<N, S>>,
    pub filter: Option<RecordFilter<N>>,
}

pub struct Dashboard<R: DomRoot, S: PreferenceStore> {
    pages: Vec<PageComponents<R::Node, S>>,
    attendance: Option<RecordStateUpdater<R>>,
    actions: Option<Rc<ActionDispatcher<R>>>,
    leave: Option<LeaveForm<R::Node>>,
    department: Option<DepartmentPanel<R::Node>>,
    payroll: Option<PayrollPanel<R::Node>>,
    messages: Option<MessageCentre<R::Node>>,
    clock: Option<Clock<R::Node>>,
    navs: Vec<NavMenu<R::Node>>,
    carousel: Option<Carousel<R::Node>>,
    slider: Option<ProductSlider<R::Node>>,
    notifier: Rc<dyn Notifier>,
}

impl<R: DomRoot, S: PreferenceStore + Clone> Dashboard<R, S> {
    pub fn build(root: R, store: S, config: &DashboardConfig, services: Services) -> Self {
        let mut pages = Vec::new();
        let mut attendance = None;
        let mut actions = None;
        let notifier = services.notifier.clone();
        let mut services = Some(services);

        for descriptor in catalog() {
            let registry = descriptor.resolve(&root);
            if registry.is_empty() {
                continue;
            }
            log::debug!("page component {} bound", registry.name);

            if let Some(records) = &registry.records {
                attendance.get_or_insert_with(|| RecordStateUpdater::new(root.clone(), records));
            }
            if let Some(action) = registry.actions.clone() {
                if let Some(s) = services.take() {
                    actions = Some(Rc::new(ActionDispatcher::new(
                        root.clone(),
                        action,
                        config,
                        s.transport,
                        s.cookies,
                        s.notifier,
                    )));
                }
            }
            pages.push(PageComponents {
                name: registry.name,
                view: registry.view.map(|b| ViewSwitch::init(b, store.clone())),
                filter: registry.filter.map(RecordFilter::new),
            });
        }

        Self {
            pages,
            attendance,
            actions,
            leave: LeaveForm::resolve(&root),
            department: DepartmentPanel::resolve(&root),
            payroll: PayrollPanel::resolve(&root),
            messages: MessageCentre::resolve(&root),
            clock: Clock::resolve(&root),
            navs: NavMenu::resolve_all(&root),
            carousel: Carousel::resolve(&root),
            slider: ProductSlider::resolve(&root),
            notifier,
        }
    }
}

impl<R: DomRoot, S: PreferenceStore> Dashboard<R, S> {
    pub fn pages(&self) -> &[PageComponents<R::Node, S>] {
        &self.pages
    }

    pub fn dispatcher(&self) -> Option<Rc<ActionDispatcher<R>>> {
        self.actions.clone()
    }

    pub fn messages(&self) -> Option<&MessageCentre<R::Node>> {
        self.messages.as_ref()
    }

    pub fn has_clock(&self) -> bool {
        self.clock.is_some()
    }

    pub fn has_carousel(&self) -> bool {
        self.carousel.is_some()
    }

    pub fn has_slider(&self) -> bool {
        self.slider.is_some()
    }

    /// Initial render of the widgets that show something before any event.
    pub fn start(&self) {
        self.handle(Command::RefreshClock);
        if let Some(messages) = &self.messages {
            messages.select_first();
        }
    }

    pub fn handle(&self, command: Command<R::Node>) -> Option<ActionRequest> {
        match command {
            Command::ShowView { page, mode } => {
                if let Some(view) = self.view(page) {
                    view.show(mode);
                }
            }
            Command::ToggleView { page } => {
                if let Some(view) = self.view(page) {
                    view.toggle();
                }
            }
            Command::ApplyFilter { page } => {
                if let Some(filter) = self.pages.get(page).and_then(|p| p.filter.as_ref()) {
                    filter.refresh();
                }
            }
            Command::SetAttendance {
                record_id,
                state,
                hours,
            } => {
                if let Some(updater) = &self.attendance {
                    updater.set_record_status(&record_id, state, hours);
                }
            }
            Command::RequestAction(request) => return Some(request),
            Command::ComputeLeave => {
                if let Some(leave) = &self.leave {
                    leave.recompute();
                }
            }
            Command::ViewDepartment(button) => {
                if let Some(department) = &self.department {
                    department.view(&button);
                }
            }
            Command::ToggleAnalytics => {
                if let Some(department) = &self.department {
                    department.toggle_analytics();
                }
            }
            Command::AddDepartment => self.notifier.notify(ADD_DEPARTMENT_NOTICE),
            Command::TogglePayrollPreview => {
                if let Some(payroll) = &self.payroll {
                    payroll.toggle_preview();
                }
            }
            Command::OpenPayslip(button) => {
                if let Some(payroll) = &self.payroll {
                    payroll.open_payslip(&button);
                }
            }
            Command::ClosePayslip => {
                if let Some(payroll) = &self.payroll {
                    payroll.close_payslip();
                }
            }
            Command::SelectTab(tab) => {
                if let Some(messages) = &self.messages {
                    messages.select_tab(&tab);
                }
            }
            Command::SelectConversation(item) => {
                if let Some(messages) = &self.messages {
                    messages.select_conversation(&item);
                }
            }
            Command::SendMessage => {
                if let Some(messages) = &self.messages {
                    messages.send();
                }
            }
            Command::DismissAlert(button) => {
                dismiss_alert(&button);
            }
            Command::ToggleNav(index) => {
                if let Some(nav) = self.navs.get(index) {
                    nav.toggle();
                }
            }
            Command::RefreshClock => {
                if let Some(clock) = &self.clock {
                    clock.refresh(local_now());
                }
            }
            Command::AdvanceCarousel => {
                if let Some(carousel) = &self.carousel {
                    carousel.advance();
                }
            }
            Command::AdvanceSlider => {
                if let Some(slider) = &self.slider {
                    slider.advance();
                }
            }
        }
        None
    }

    /// Handle a click anywhere in the document. Returns the action request
    /// to send, if the click asked for one.
    pub fn on_click(&self, target: &R::Node) -> Option<ActionRequest> {
        for nav in &self.navs {
            nav.close_if_outside(target);
        }
        let command = self.click_command(target)?;
        self.handle(command)
    }

    /// Returns `true` when the key press was consumed.
    pub fn on_key(&self, target: &R::Node, key: &str, shift: bool) -> bool {
        if key != "Enter" {
            return false;
        }
        if let Some(input) = self.messages.as_ref().and_then(|m| m.input()) {
            if !shift && input == target {
                self.handle(Command::SendMessage);
                return true;
            }
        }
        for (page, components) in self.pages.iter().enumerate() {
            let Some(view) = &components.view else {
                continue;
            };
            if !view.binding().keyboard {
                continue;
            }
            if let Some(command) = view_control_command(page, &view.binding().controls, target) {
                self.handle(command);
                return true;
            }
        }
        false
    }

    pub fn on_field(&self, target: &R::Node, event: FieldEvent) {
        if let Some(command) = self.field_command(target, event) {
            self.handle(command);
        }
    }

    pub fn click_command(&self, target: &R::Node) -> Option<Command<R::Node>> {
        for (page, components) in self.pages.iter().enumerate() {
            if let Some(view) = &components.view {
                if let Some(command) = view_control_command(page, &view.binding().controls, target) {
                    return Some(command);
                }
            }
        }

        if let Some((record_id, state, hours)) = self
            .attendance
            .as_ref()
            .and_then(|updater| updater.resolve_click(target))
        {
            return Some(Command::SetAttendance {
                record_id,
                state,
                hours,
            });
        }
        if let Some(request) = self.actions.as_ref().and_then(|d| d.request_for(target)) {
            return Some(Command::RequestAction(request));
        }

        let within = |class: &str| target.closest(&Selector::class(class));
        if let Some(button) = within("alert-dismiss") {
            return Some(Command::DismissAlert(button));
        }
        if let Some(department) = &self.department {
            if let Some(button) = within("btn-view") {
                return Some(Command::ViewDepartment(button));
            }
            if department.analytics_toggle().is_some_and(|t| t.contains(target)) {
                return Some(Command::ToggleAnalytics);
            }
            if department.add_button().is_some_and(|b| b.contains(target)) {
                return Some(Command::AddDepartment);
            }
        }
        if let Some(payroll) = &self.payroll {
            if let Some(button) = within("btn-view-payslip") {
                return Some(Command::OpenPayslip(button));
            }
            if payroll.close_buttons().iter().any(|b| b.contains(target)) {
                return Some(Command::ClosePayslip);
            }
            if payroll.preview_toggle().is_some_and(|t| t.contains(target)) {
                return Some(Command::TogglePayrollPreview);
            }
        }
        if let Some(messages) = &self.messages {
            if let Some(tab) = messages.tabs().iter().find(|t| t.contains(target)) {
                return Some(Command::SelectTab(tab.clone()));
            }
            if let Some(item) = messages.conversations().iter().find(|c| c.contains(target)) {
                return Some(Command::SelectConversation(item.clone()));
            }
            if messages.send_button().is_some_and(|b| b.contains(target)) {
                return Some(Command::SendMessage);
            }
        }
        self.navs
            .iter()
            .position(|nav| nav.toggle.contains(target))
            .map(Command::ToggleNav)
    }

    pub fn field_command(&self, target: &R::Node, event: FieldEvent) -> Option<Command<R::Node>> {
        for (page, components) in self.pages.iter().enumerate() {
            let Some(filter) = &components.filter else {
                continue;
            };
            let binding = filter.binding();
            let search_event = match binding.trigger {
                FilterTrigger::Input => FieldEvent::Input,
                FilterTrigger::KeyUp => FieldEvent::KeyUp,
            };
            let from_search = event == search_event && binding.search_input.as_ref() == Some(target);
            let from_select =
                event == FieldEvent::Change && binding.category_select.as_ref() == Some(target);
            if from_search || from_select {
                return Some(Command::ApplyFilter { page });
            }
        }
        let leave = self.leave.as_ref()?;
        (event == FieldEvent::Change && leave.inputs().contains(&target)).then_some(Command::ComputeLeave)
    }

    fn view(&self, page: usize) -> Option<&ViewSwitch<R::Node, S>> {
        self.pages.get(page).and_then(|p| p.view.as_ref())
    }
}

fn view_control_command<N: DomNode>(
    page: usize,
    controls: &ResolvedControls<N>,
    target: &N,
) -> Option<Command<N>> {
    match controls {
        ResolvedControls::Pair { card, .. } if card.contains(target) => Some(Command::ShowView {
            page,
            mode: ViewMode::Card,
        }),
        ResolvedControls::Pair { table, .. } if table.contains(target) => Some(Command::ShowView {
            page,
            mode: ViewMode::Table,
        }),
        ResolvedControls::Single { toggle } if toggle.contains(target) => {
            Some(Command::ToggleView { page })
        }
        _ => None,
    }
}
