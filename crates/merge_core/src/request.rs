use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Identifier of a document or email created by a generate call.
pub type ArtifactId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeliveryMode {
    #[default]
    File,
    Email,
}

impl DeliveryMode {
    /// Options in the order they are offered to the user.
    pub const OPTIONS: [DeliveryMode; 2] = [DeliveryMode::File, DeliveryMode::Email];

    pub fn label(self) -> &'static str {
        match self {
            DeliveryMode::File => "Download Files",
            DeliveryMode::Email => "Send Emails",
        }
    }

    /// Value understood by the merge service.
    pub fn as_wire(self) -> &'static str {
        match self {
            DeliveryMode::File => "FILE",
            DeliveryMode::Email => "EMAIL",
        }
    }
}

impl fmt::Display for DeliveryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown delivery mode {0:?} (expected FILE or EMAIL)")]
pub struct UnknownDeliveryMode(pub String);

impl FromStr for DeliveryMode {
    type Err = UnknownDeliveryMode;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        DeliveryMode::OPTIONS
            .into_iter()
            .find(|mode| mode.as_wire().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownDeliveryMode(raw.to_string()))
    }
}

/// Payload sent to the merge service for both preview and generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRequest {
    pub source_id: String,
    pub template_id: String,
    pub delivery_mode: DeliveryMode,
    pub preview_only: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreviewResult {
    pub rendered_body: String,
    pub tokens: BTreeMap<String, String>,
}

impl PreviewResult {
    pub fn new<K, V>(
        rendered_body: impl Into<String>,
        tokens: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            rendered_body: rendered_body.into(),
            tokens: tokens
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// A single resolved token, borrowed from the current preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenEntry<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivery_mode_parses_case_insensitively() {
        assert_eq!("email".parse::<DeliveryMode>(), Ok(DeliveryMode::Email));
        assert_eq!(" FILE ".parse::<DeliveryMode>(), Ok(DeliveryMode::File));
        assert_eq!(
            "fax".parse::<DeliveryMode>(),
            Err(UnknownDeliveryMode("fax".to_string()))
        );
    }

    #[test]
    fn delivery_mode_defaults_to_file() {
        assert_eq!(DeliveryMode::default(), DeliveryMode::File);
        assert_eq!(DeliveryMode::File.label(), "Download Files");
        assert_eq!(DeliveryMode::Email.label(), "Send Emails");
    }

    #[test]
    fn duplicate_token_names_keep_the_last_value() {
        let preview = PreviewResult::new("body", [("name", "A"), ("name", "B")]);
        assert_eq!(preview.tokens.len(), 1);
        assert_eq!(preview.tokens["name"], "B");
    }
}
