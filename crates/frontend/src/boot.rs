//! Browser wiring: builds the [`Dashboard`] for the loaded document and
//! forwards delegated document events and timer ticks to it.

use crate::app::{Command, Dashboard, FieldEvent, Services};
use crate::config::DashboardConfig;
use crate::pages::messages::mount_thread;
use crate::shared::api_utils::DocumentCookies;
use crate::shared::dom::web::{WebDocument, WebNode};
use crate::shared::notify::WindowAlert;
use crate::shared::storage::LocalStorage;
use crate::sync::dispatch::FetchTransport;
use any_spawner::Executor;
use contracts::domain::finance_request::ActionRequest;
use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use std::rc::Rc;
use web_sys::{Event, KeyboardEvent};

type WebDashboard = Dashboard<WebDocument, LocalStorage>;

pub fn boot(document: WebDocument, config: &DashboardConfig) {
    let _ = Executor::init_wasm_bindgen();

    let services = Services {
        transport: Box::new(FetchTransport),
        cookies: Box::new(DocumentCookies),
        notifier: Rc::new(WindowAlert),
    };
    let dashboard = Rc::new(Dashboard::build(document.clone(), LocalStorage, config, services));

    if let Some(messages) = dashboard.messages() {
        if let Some(host) = messages.chat_body().and_then(WebNode::as_html) {
            messages.set_renderer(mount_thread(host.clone()));
        }
    }
    dashboard.start();

    let d = dashboard.clone();
    document.on("click", move |event: Event| {
        let Some(target) = WebNode::from_event(&event) else {
            return;
        };
        if let Some(request) = d.on_click(&target) {
            event.prevent_default();
            dispatch(&d, request);
        }
    });

    let d = dashboard.clone();
    document.on("keydown", move |event: KeyboardEvent| {
        let Some(target) = WebNode::from_event(event.as_ref()) else {
            return;
        };
        if d.on_key(&target, &event.key(), event.shift_key()) {
            event.prevent_default();
        }
    });

    for (name, field_event) in [
        ("input", FieldEvent::Input),
        ("keyup", FieldEvent::KeyUp),
        ("change", FieldEvent::Change),
    ] {
        let d = dashboard.clone();
        document.on(name, move |event: Event| {
            if let Some(target) = WebNode::from_event(&event) {
                d.on_field(&target, field_event);
            }
        });
    }

    if dashboard.has_clock() {
        every(config.clock_interval_ms, dashboard.clone(), || Command::RefreshClock);
    }
    if dashboard.has_carousel() {
        every(config.carousel_interval_ms, dashboard.clone(), || Command::AdvanceCarousel);
    }
    if dashboard.has_slider() {
        every(config.slider_interval_ms, dashboard.clone(), || Command::AdvanceSlider);
    }

    log::info!("dashboard ready ({} page components)", dashboard.pages().len());
}

fn dispatch(dashboard: &WebDashboard, request: ActionRequest) {
    let Some(dispatcher) = dashboard.dispatcher() else {
        return;
    };
    spawn_local(async move {
        dispatcher.dispatch(request).await;
    });
}

fn every(ms: u32, dashboard: Rc<WebDashboard>, command: fn() -> Command<WebNode>) {
    if ms == 0 {
        return;
    }
    spawn_local(async move {
        loop {
            TimeoutFuture::new(ms).await;
            dashboard.handle(command());
        }
    });
}
