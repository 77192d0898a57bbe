//! Message centre: conversation tabs, conversation list and the open thread.
//!
//! The thread itself is client-side only. [`MessageCentre`] owns the
//! [`ChatThread`] and hands every new state to a renderer; in the browser the
//! renderer feeds the [`ChatThreadView`] component mounted in `.chat-body`.

use crate::shared::date_utils::{format_clock_time, local_now};
use crate::shared::dom::{DomNode, DomRoot, Selector};
use contracts::domain::message::{conversation_listed, ChatMessage, ChatThread};
use leptos::prelude::*;
use std::cell::RefCell;

const ACTIVE: &str = "active";

pub type ThreadRenderer = Box<dyn Fn(&[ChatMessage])>;

pub struct MessageCentre<N: DomNode> {
    tabs: Vec<N>,
    conversations: Vec<N>,
    header_title: Option<N>,
    chat_body: Option<N>,
    input: Option<N>,
    send_button: Option<N>,
    thread: RefCell<ChatThread>,
    renderer: RefCell<Option<ThreadRenderer>>,
}

impl<N: DomNode> MessageCentre<N> {
    pub fn resolve<R: DomRoot<Node = N>>(root: &R) -> Option<Self> {
        let conversations = root.select_all(&Selector::class("conversation"));
        let chat_body = root.select(&Selector::class("chat-body"));
        if conversations.is_empty() && chat_body.is_none() {
            return None;
        }
        let header_title = root
            .select(&Selector::class("chat-header"))
            .and_then(|header| header.select(&Selector::tag("h3")));
        let tabs = root
            .select_all(&Selector::class("conversation-tabs"))
            .iter()
            .flat_map(|bar| bar.select_all(&Selector::class("tab")))
            .collect();
        let footer = root.select(&Selector::class("chat-footer"));
        let input = footer.as_ref().and_then(|f| f.select(&Selector::tag("input")));
        let send_button = footer.as_ref().and_then(|f| f.select(&Selector::tag("button")));

        Some(Self {
            tabs,
            conversations,
            header_title,
            chat_body,
            input,
            send_button,
            thread: RefCell::new(ChatThread::default()),
            renderer: RefCell::new(None),
        })
    }

    pub fn tabs(&self) -> &[N] {
        &self.tabs
    }

    pub fn conversations(&self) -> &[N] {
        &self.conversations
    }

    pub fn chat_body(&self) -> Option<&N> {
        self.chat_body.as_ref()
    }

    pub fn input(&self) -> Option<&N> {
        self.input.as_ref()
    }

    pub fn send_button(&self) -> Option<&N> {
        self.send_button.as_ref()
    }

    pub fn set_renderer(&self, renderer: ThreadRenderer) {
        *self.renderer.borrow_mut() = Some(renderer);
        self.render();
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.thread.borrow().messages().to_vec()
    }

    /// Activate `tab` and show the conversations it lists.
    pub fn select_tab(&self, tab: &N) {
        for t in &self.tabs {
            t.remove_class(ACTIVE);
        }
        tab.add_class(ACTIVE);

        let filter = tab
            .attr("data-filter")
            .unwrap_or_else(|| tab.text().trim().to_lowercase());
        for conversation in &self.conversations {
            let kind = conversation.attr("data-type").unwrap_or_default();
            conversation.set_displayed(conversation_listed(&filter, &kind));
        }
        log::debug!("conversation tab {}", filter);
    }

    /// Open the conversation `item` belongs to.
    pub fn select_conversation(&self, item: &N) {
        let Some(conversation) = item.closest(&Selector::class("conversation")) else {
            return;
        };
        for c in &self.conversations {
            c.remove_class(ACTIVE);
        }
        conversation.add_class(ACTIVE);

        let details = conversation.select(&Selector::class("details"));
        let text_of = |tag: &str| {
            details
                .as_ref()
                .and_then(|d| d.select(&Selector::tag(tag)))
                .map(|n| n.text().trim().to_string())
                .unwrap_or_default()
        };
        let name = text_of("h4");
        let snippet = text_of("p");
        let time = conversation
            .select(&Selector::class("time"))
            .map(|n| n.text())
            .unwrap_or_default();

        if let Some(title) = &self.header_title {
            title.set_text(&name);
        }
        self.thread.borrow_mut().open(&snippet, &time);
        self.render();
    }

    pub fn select_first(&self) {
        if let Some(first) = self.conversations.first() {
            self.select_conversation(first);
        }
    }

    /// Append the typed message to the thread and clear the input.
    pub fn send(&self) -> bool {
        let Some(input) = &self.input else {
            return false;
        };
        let time = format_clock_time(local_now());
        let sent = self.thread.borrow_mut().send(&input.value(), &time).is_some();
        if sent {
            input.set_value("");
            self.render();
        }
        sent
    }

    fn render(&self) {
        if let Some(renderer) = self.renderer.borrow().as_ref() {
            renderer(self.thread.borrow().messages());
        }
    }
}

#[component]
pub fn ChatThreadView(messages: ReadSignal<Vec<ChatMessage>>) -> impl IntoView {
    view! {
        <For
            each=move || messages.get()
            key=|message| message.id
            let:message
        >
            <div class=message.css_class()>
                <p>{message.text.clone()}</p>
                <span class="time">{message.time.clone()}</span>
            </div>
        </For>
    }
}

/// Mount [`ChatThreadView`] into `host` and return the renderer that drives it.
pub fn mount_thread(host: web_sys::HtmlElement) -> ThreadRenderer {
    let (messages, set_messages) = signal(Vec::<ChatMessage>::new());
    host.set_inner_text("");
    leptos::mount::mount_to(host, move || view! { <ChatThreadView messages=messages /> })
        .forget();
    Box::new(move |thread: &[ChatMessage]| set_messages.set(thread.to_vec()))
}
