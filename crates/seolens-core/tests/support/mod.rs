//! Document builders shared by the integration tests

#![allow(dead_code)]

use serde_json::{Value, json};

pub fn text(value: &str) -> Value {
    json!({"type": "text", "text": value})
}

pub fn heading(level: u8, value: &str) -> Value {
    json!({"type": "heading", "attrs": {"level": level}, "content": [text(value)]})
}

pub fn paragraph(value: &str) -> Value {
    json!({"type": "paragraph", "content": [text(value)]})
}

pub fn image(src: &str, alt: &str) -> Value {
    json!({"type": "image", "attrs": {"src": src, "alt": alt}})
}

pub fn doc(content: Vec<Value>) -> Value {
    json!({"type": "doc", "content": content})
}

/// `count` words of filler, optionally opening with `lead`.
pub fn words(lead: Option<&str>, count: usize) -> String {
    let mut out: Vec<String> = Vec::new();
    if let Some(lead) = lead {
        out.extend(lead.split_whitespace().map(str::to_string));
    }
    while out.len() < count {
        out.push("lezzet".to_string());
    }
    out.join(" ")
}

/// `prefix` padded with filler characters to exactly `len` characters.
pub fn sized(prefix: &str, len: usize) -> String {
    let mut out: String = prefix.chars().take(len).collect();
    while out.chars().count() < len {
        out.push('a');
    }
    out
}

/// Snapshot JSON as the admin form would post it.
pub fn snapshot_json(fields: Value) -> String {
    serde_json::to_string(&fields).expect("serializable snapshot")
}
