use std::collections::BTreeMap;

use chrono::NaiveTime;
use once_cell::sync::Lazy;
use uuid::Uuid;

use crate::error::{PortalResult, ValidationErrors};
use crate::model::chat::SELF_SENDER;
use crate::model::{Attachment, Channel, ChatMessage, Contact};
use crate::utils::dates;
use crate::utils::local_store::{CHAT_MESSAGES_KEY, LocalStore};

pub static CONTACTS: Lazy<Vec<Contact>> = Lazy::new(|| {
    vec![
        contact("john", "John Doe", "Software Engineer"),
        contact("sarah", "Sarah Khan", "Product"),
        contact("michael", "Michael Ray", "Design"),
    ]
});

pub static GROUPS: Lazy<Vec<Channel>> = Lazy::new(|| {
    vec![channel("project-a", "Project A"), channel("hr", "HR Team")]
});

pub static ANNOUNCEMENTS: Lazy<Vec<Channel>> =
    Lazy::new(|| vec![channel("company", "Company Announcements")]);

fn contact(id: &str, name: &str, subtitle: &str) -> Contact {
    Contact {
        id: id.into(),
        name: name.into(),
        subtitle: subtitle.into(),
    }
}

fn channel(id: &str, name: &str) -> Channel {
    Channel {
        id: id.into(),
        name: name.into(),
    }
}

fn seed_message(id: &str, from: &str, text: &str, time: &str) -> ChatMessage {
    ChatMessage {
        id: id.into(),
        from: from.into(),
        text: text.into(),
        time: time.into(),
        file: None,
    }
}

/// Conversation shown on first launch. Direct chats are keyed by contact
/// id, group and announcement channels by their display name.
pub fn initial_messages() -> BTreeMap<String, Vec<ChatMessage>> {
    BTreeMap::from([
        (
            "john".to_string(),
            vec![
                seed_message("1", "john", "Hey! You available for a quick sync?", "10:30 AM"),
                seed_message("2", SELF_SENDER, "Yes, jumping in 5 mins.", "10:32 AM"),
            ],
        ),
        (
            "sarah".to_string(),
            vec![seed_message("1", "sarah", "Please review the PR when free.", "09:10 AM")],
        ),
        (
            "Project A".to_string(),
            vec![seed_message("1", "member", "Standup at 11, don't miss.", "08:00 AM")],
        ),
        (
            "Company Announcements".to_string(),
            vec![seed_message("1", "admin", "All-hands on Friday @4pm", "Yesterday")],
        ),
    ])
}

/// Contacts whose name contains `query`, ignoring case. Blank query lists all.
pub fn search_contacts(query: &str) -> Vec<&'static Contact> {
    let q = query.trim().to_lowercase();
    CONTACTS
        .iter()
        .filter(|c| q.is_empty() || c.name.to_lowercase().contains(&q))
        .collect()
}

#[derive(Debug)]
pub struct ChatBook {
    store: LocalStore,
    messages: BTreeMap<String, Vec<ChatMessage>>,
}

impl ChatBook {
    pub fn load(store: LocalStore) -> Self {
        let messages = store
            .load(CHAT_MESSAGES_KEY)
            .unwrap_or_else(initial_messages);
        Self { store, messages }
    }

    pub fn conversations(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    pub fn messages(&self, key: &str) -> &[ChatMessage] {
        self.messages.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn last_message(&self, key: &str) -> Option<&ChatMessage> {
        self.messages(key).last()
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(CHAT_MESSAGES_KEY, &self.messages) {
            tracing::error!(error = %e, "Failed to persist chat messages");
        }
    }

    /// Appends a message from the signed-in user to conversation `key`.
    /// Either text or an attachment is required.
    pub fn send(
        &mut self,
        key: &str,
        text: &str,
        attachment: Option<Attachment>,
        now: NaiveTime,
    ) -> PortalResult<ChatMessage> {
        let text = text.trim();
        let body = match (&attachment, text.is_empty()) {
            (None, true) => {
                let mut err = ValidationErrors::new();
                err.add("message", "Type a message or attach a file");
                return Err(err.into());
            }
            (Some(file), true) => format!("[file] {}", file.name),
            (_, false) => text.to_string(),
        };

        let msg = ChatMessage {
            id: Uuid::new_v4().to_string(),
            from: SELF_SENDER.to_string(),
            text: body,
            time: dates::clock_label(now),
            file: attachment,
        };

        tracing::debug!(conversation = key, id = %msg.id, "Message sent");

        self.messages
            .entry(key.to_string())
            .or_default()
            .push(msg.clone());
        self.persist();

        Ok(msg)
    }
}
