//! Structured syslog message model.

use std::hash::{Hash, Hasher};
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SdError};

/// PARAM-NAME -> PARAM-VALUE, in wire order. `None` is a missing value and is
/// rejected by the encoder.
pub type SdParams = IndexMap<String, Option<String>>;

/// SD-ID -> parameters, in wire order.
pub type StructuredData = IndexMap<String, SdParams>;

/// MSGID, STRUCTURED-DATA and MSG of one syslog message.
///
/// `proc_id` rides along as metadata only: it is never written to the wire
/// and does not take part in equality or hashing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StructuredMessage {
    #[serde(default)]
    message_id: Option<String>,
    #[serde(default)]
    proc_id: Option<String>,
    #[serde(default)]
    structured_data: StructuredData,
    #[serde(default)]
    message: String,
}

impl StructuredMessage {
    pub fn new(
        message_id: Option<String>,
        proc_id: Option<String>,
        structured_data: StructuredData,
        message: impl Into<String>,
    ) -> Self {
        Self {
            message_id,
            proc_id,
            structured_data,
            message: message.into(),
        }
    }

    pub fn with_message_id(mut self, id: impl Into<String>) -> Self {
        self.message_id = Some(id.into());
        self
    }

    pub fn with_proc_id(mut self, id: impl Into<String>) -> Self {
        self.proc_id = Some(id.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Append (or replace) one SD element built from name/value pairs.
    pub fn with_element<K, N, V, I>(mut self, sd_id: K, params: I) -> Self
    where
        K: Into<String>,
        N: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (N, V)>,
    {
        let params = params
            .into_iter()
            .map(|(n, v)| (n.into(), Some(v.into())))
            .collect();
        self.structured_data.insert(sd_id.into(), params);
        self
    }

    pub fn with_structured_data(mut self, structured_data: StructuredData) -> Self {
        self.structured_data = structured_data;
        self
    }

    pub fn message_id(&self) -> Option<&str> {
        self.message_id.as_deref()
    }

    pub fn proc_id(&self) -> Option<&str> {
        self.proc_id.as_deref()
    }

    pub fn structured_data(&self) -> &StructuredData {
        &self.structured_data
    }

    /// Present parameter value of one element, if any.
    pub fn param(&self, sd_id: &str, name: &str) -> Option<&str> {
        self.structured_data.get(sd_id)?.get(name)?.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Render the wire text.
    pub fn encode(&self) -> Result<String> {
        super::encoder::encode(self)
    }
}

impl FromStr for StructuredMessage {
    type Err = SdError;

    fn from_str(s: &str) -> Result<Self> {
        super::decoder::decode(s)
    }
}

impl PartialEq for StructuredMessage {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
            && self.message_id == other.message_id
            && self.structured_data == other.structured_data
    }
}

impl Eq for StructuredMessage {}

impl Hash for StructuredMessage {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.message.hash(state);
        self.message_id.hash(state);

        // IndexMap equality ignores order, so hash in key order.
        let mut elements: Vec<_> = self.structured_data.iter().collect();
        elements.sort_by(|a, b| a.0.cmp(b.0));
        state.write_usize(elements.len());
        for (sd_id, params) in elements {
            sd_id.hash(state);
            let mut params: Vec<_> = params.iter().collect();
            params.sort_by(|a, b| a.0.cmp(b.0));
            params.hash(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;

    use super::*;

    fn hash_of(m: &StructuredMessage) -> u64 {
        let mut h = DefaultHasher::new();
        m.hash(&mut h);
        h.finish()
    }

    #[test]
    fn proc_id_not_part_of_equality() {
        let a = StructuredMessage::default()
            .with_message_id("ID1")
            .with_proc_id("100")
            .with_message("m");
        let b = a.clone().with_proc_id("200");
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(b.proc_id(), Some("200"));
    }

    #[test]
    fn insertion_order_does_not_affect_equality() {
        let a = StructuredMessage::default()
            .with_element("a@1", [("x", "1"), ("y", "2")])
            .with_element("b@1", [("z", "3")]);
        let b = StructuredMessage::default()
            .with_element("b@1", [("z", "3")])
            .with_element("a@1", [("y", "2"), ("x", "1")]);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn field_differences_break_equality() {
        let base = StructuredMessage::default().with_message_id("ID").with_message("m");
        assert_ne!(base, base.clone().with_message("n"));
        assert_ne!(base, base.clone().with_message_id("OTHER"));
        assert_ne!(base, base.clone().with_element("a@1", [("k", "v")]));
    }

    #[test]
    fn param_lookup() {
        let m = StructuredMessage::default().with_element("origin", [("ip", "10.0.0.1")]);
        assert_eq!(m.param("origin", "ip"), Some("10.0.0.1"));
        assert_eq!(m.param("origin", "software"), None);
        assert_eq!(m.param("meta", "ip"), None);
    }
}
