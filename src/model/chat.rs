use serde::{Deserialize, Deserializer, Serialize};

/// Sender id used for messages typed by the signed-in user.
pub const SELF_SENDER: &str = "me";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(rename = "type", default)]
    pub mime_type: String,
}

impl Attachment {
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Older histories stored millisecond timestamps here.
    #[serde(deserialize_with = "id_from_number_or_string")]
    pub id: String,
    pub from: String,
    pub text: String,
    /// Display label, e.g. `10:30 AM` or `Yesterday`.
    pub time: String,
    #[serde(default)]
    pub file: Option<Attachment>,
}

impl ChatMessage {
    pub fn is_mine(&self) -> bool {
        self.from == SELF_SENDER
    }
}

fn id_from_number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
        RawId::Float(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_text_ids_both_load() {
        let msgs: Vec<ChatMessage> = serde_json::from_str(
            r#"[
                {"id": 1758000000000, "from": "me", "text": "hi", "time": "02:05 PM", "file": null},
                {"id": "b1c2", "from": "john", "text": "yo", "time": "02:06 PM"}
            ]"#,
        )
        .unwrap();

        assert_eq!(msgs[0].id, "1758000000000");
        assert!(msgs[0].is_mine());
        assert_eq!(msgs[1].id, "b1c2");
        assert!(msgs[1].file.is_none());
    }

    #[test]
    fn ids_are_written_as_text() {
        let msg: ChatMessage =
            serde_json::from_str(r#"{"id": 7, "from": "me", "text": "x", "time": "Yesterday"}"#).unwrap();
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["id"], "7");
    }
}
