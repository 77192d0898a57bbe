//! Remote action dispatcher.
//!
//! Sends one record's action to the server and reconciles the confirmed
//! status into every node of that record. Failures leave the record as it was
//! and surface a notice; nothing is retried.

use super::registry::ActionDescriptor;
use crate::config::{DashboardConfig, DuplicatePolicy};
use crate::shared::api_utils::{action_headers, CookieSource};
use crate::shared::dom::{DomNode, DomRoot, Selector};
use crate::shared::notify::Notifier;
use async_trait::async_trait;
use contracts::domain::finance_request::{
    badge_class, ActionError, ActionRequest, ActionResponse, HttpVerb,
};
use gloo_net::http::Request;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

/// Carries an action request to the server and returns the raw body.
#[async_trait(?Send)]
pub trait ActionTransport {
    async fn send(
        &self,
        request: &ActionRequest,
        headers: &[(String, String)],
    ) -> Result<String, ActionError>;
}

/// `fetch` through gloo-net.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl ActionTransport for FetchTransport {
    async fn send(
        &self,
        request: &ActionRequest,
        headers: &[(String, String)],
    ) -> Result<String, ActionError> {
        let builder = match request.verb {
            HttpVerb::Post => Request::post(&request.endpoint),
            HttpVerb::Put => Request::put(&request.endpoint),
            HttpVerb::Delete => Request::delete(&request.endpoint),
        };
        let builder = headers
            .iter()
            .fold(builder, |b, (name, value)| b.header(name, value));

        let response = builder
            .send()
            .await
            .map_err(|e| ActionError::Transport(format!("Failed to send request: {}", e)))?;

        response
            .text()
            .await
            .map_err(|e| ActionError::Transport(format!("Failed to read response: {}", e)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Server confirmed the new status.
    Confirmed(String),
    /// Notice shown to the user.
    Failed(String),
    /// Dropped because the record already has a request in flight.
    Ignored,
}

pub struct ActionDispatcher<R: DomRoot> {
    root: R,
    descriptor: ActionDescriptor,
    transport: Box<dyn ActionTransport>,
    cookies: Box<dyn CookieSource>,
    notifier: Rc<dyn Notifier>,
    policy: DuplicatePolicy,
    csrf_cookie: String,
    csrf_header: String,
    in_flight: RefCell<HashSet<String>>,
}

impl<R: DomRoot> ActionDispatcher<R> {
    pub fn new(
        root: R,
        descriptor: ActionDescriptor,
        config: &DashboardConfig,
        transport: Box<dyn ActionTransport>,
        cookies: Box<dyn CookieSource>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        Self {
            root,
            descriptor,
            transport,
            cookies,
            notifier,
            policy: config.duplicate_policy,
            csrf_cookie: config.csrf_cookie.clone(),
            csrf_header: config.csrf_header.clone(),
            in_flight: RefCell::new(HashSet::new()),
        }
    }

    /// Build the request for a click on (or inside) an action control.
    pub fn request_for(&self, target: &R::Node) -> Option<ActionRequest> {
        let control = target.closest(&self.descriptor.trigger)?;
        let Some(endpoint) = control.attr("data-url").filter(|u| !u.is_empty()) else {
            log::warn!("action control without data-url");
            return None;
        };
        let record = control.closest(&Selector::attr(self.descriptor.id_attr))?;
        Some(ActionRequest {
            record_id: record.attr(self.descriptor.id_attr)?,
            endpoint,
            verb: HttpVerb::parse(&control.attr("data-method").unwrap_or_default()),
        })
    }

    pub fn is_in_flight(&self, record_id: &str) -> bool {
        self.in_flight.borrow().contains(record_id)
    }

    pub async fn dispatch(&self, request: ActionRequest) -> DispatchOutcome {
        let guarded = self.policy == DuplicatePolicy::Ignore;
        if guarded {
            if !self.in_flight.borrow_mut().insert(request.record_id.clone()) {
                log::debug!("{} already in flight, ignoring", request.record_id);
                return DispatchOutcome::Ignored;
            }
            self.set_busy(&request.record_id, true);
        }

        let headers = action_headers(&*self.cookies, &self.csrf_cookie, &self.csrf_header);
        let result = match self.transport.send(&request, &headers).await {
            Ok(body) => ActionResponse::confirmed_status(&body),
            Err(e) => Err(e),
        };

        if guarded {
            self.in_flight.borrow_mut().remove(&request.record_id);
        }

        match result {
            Ok(status) => {
                self.reconcile(&request.record_id, &status);
                log::debug!("{} confirmed as {}", request.record_id, status);
                DispatchOutcome::Confirmed(status)
            }
            Err(err) => {
                log::error!(
                    "action {} for {} failed: {}",
                    request.endpoint,
                    request.record_id,
                    err
                );
                if guarded {
                    self.set_busy(&request.record_id, false);
                }
                let message = err.user_message();
                self.notifier.notify(&message);
                DispatchOutcome::Failed(message)
            }
        }
    }

    fn record_nodes(&self, record_id: &str) -> Vec<R::Node> {
        self.root
            .select_all(&Selector::attr_eq(self.descriptor.id_attr, record_id))
    }

    /// Write the confirmed status into every representation of the record.
    fn reconcile(&self, record_id: &str, status: &str) {
        for node in self.record_nodes(record_id) {
            if let Some(badge) = node.select(&Selector::class("badge")) {
                badge.set_text(status);
                badge.set_class_name(&badge_class(status));
            }
            if let Some(row) = node.select(&Selector::class("action-row")) {
                row.clear();
                if let Some(p) = row.append("p") {
                    p.set_class_name("processed-text");
                    if let Some(em) = p.append("em") {
                        em.set_text(status);
                    }
                }
            }
            node.remove_attr("aria-busy");
        }
    }

    fn set_busy(&self, record_id: &str, busy: bool) {
        for node in self.record_nodes(record_id) {
            for control in node.select_all(&self.descriptor.trigger) {
                control.set_disabled(busy);
            }
            if busy {
                node.set_attr("aria-busy", "true");
            } else {
                node.remove_attr("aria-busy");
            }
        }
    }
}
