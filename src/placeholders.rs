use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

/// Tokens recognized in templates, paired with a human-readable label.
pub const PLACEHOLDERS: &[(&str, &str)] = &[
    ("Place_Holder_Name", "Name"),
    ("Place_Holder_contact", "Contact Number"),
    ("Place_Holder_Mail", "Email"),
    ("Place_Holder_linkedin", "LinkedIn Profile"),
    ("Place_Holder_github", "GitHub Profile"),
];

/// Serializes [`PLACEHOLDERS`] as a JSON object in declaration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderTable;

impl Serialize for PlaceholderTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(PLACEHOLDERS.iter().copied())
    }
}

pub fn label(token: &str) -> Option<&'static str> {
    PLACEHOLDERS
        .iter()
        .find(|(known, _)| *known == token)
        .map(|(_, label)| *label)
}

pub fn is_placeholder(token: &str) -> bool {
    label(token).is_some()
}

/// Replaces every literal occurrence of each supplied recognized token.
///
/// Supplied tokens outside [`PLACEHOLDERS`] are skipped, so their text stays
/// in the output as-is.
pub fn substitute(text: &str, values: &BTreeMap<String, String>) -> String {
    let mut out = text.to_string();
    for (token, value) in values {
        if !is_placeholder(token) {
            tracing::debug!(%token, "ignoring unrecognized placeholder");
            continue;
        }
        out = out.replace(token.as_str(), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn mapping_has_five_fixed_entries() {
        assert_eq!(PLACEHOLDERS.len(), 5);
        assert_eq!(label("Place_Holder_Mail"), Some("Email"));
        assert_eq!(label("Place_Holder_contact"), Some("Contact Number"));
        assert_eq!(label("place_holder_mail"), None);
    }

    #[test]
    fn table_serializes_in_declaration_order() {
        let json = serde_json::to_string(&PlaceholderTable).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"Place_Holder_Name":"Name","#,
                r#""Place_Holder_contact":"Contact Number","#,
                r#""Place_Holder_Mail":"Email","#,
                r#""Place_Holder_linkedin":"LinkedIn Profile","#,
                r#""Place_Holder_github":"GitHub Profile"}"#,
            )
        );
    }

    #[test]
    fn replaces_every_occurrence() {
        let text = "Place_Holder_Name -- Place_Holder_Name <Place_Holder_Mail>";
        let out = substitute(
            text,
            &values(&[
                ("Place_Holder_Name", "Ada Lovelace"),
                ("Place_Holder_Mail", "ada@example.com"),
            ]),
        );
        assert_eq!(out, "Ada Lovelace -- Ada Lovelace <ada@example.com>");
    }

    #[test]
    fn unrecognized_tokens_are_left_untouched() {
        let text = "Hello Custom_Token, Place_Holder_github";
        let out = substitute(
            text,
            &values(&[
                ("Custom_Token", "should not appear"),
                ("Place_Holder_github", "github.com/ada"),
            ]),
        );
        assert_eq!(out, "Hello Custom_Token, github.com/ada");
    }

    #[test]
    fn unfilled_placeholders_remain() {
        let out = substitute("Place_Holder_linkedin", &BTreeMap::new());
        assert_eq!(out, "Place_Holder_linkedin");
    }
}
