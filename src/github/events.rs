use std::fmt::Display;

use serde::{Deserialize, Deserializer};

/// One entry of the `/users/{username}/events` listing.
///
/// The API only fills the payload fields relevant to the event type, so every field defaults to
/// its empty value when missing or `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Event {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub r#type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub repo: Repo,
    #[serde(deserialize_with = "null_as_default")]
    pub payload: Payload,
}

impl Event {
    pub fn kind(&self) -> EventKind<'_> {
        EventKind::from_type(&self.r#type)
    }
}

/// The event types we have a dedicated message for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind<'a> {
    Push,
    Create,
    Watch,
    Fork,
    Other(&'a str),
}

impl<'a> EventKind<'a> {
    pub fn from_type(r#type: &'a str) -> Self {
        match r#type {
            "PushEvent" => Self::Push,
            "CreateEvent" => Self::Create,
            "WatchEvent" => Self::Watch,
            "ForkEvent" => Self::Fork,
            other => Self::Other(other),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Repo {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

// Renders the whole record rather than the bare name, e.g. `{octocat/Hello-World}`.
impl Display for Repo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Payload {
    #[serde(deserialize_with = "null_as_default")]
    pub r#ref: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ref_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub action: String,
    #[serde(deserialize_with = "null_as_default")]
    pub commits: Vec<Commit>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Commit {
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
}

fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(de).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decode_push_event() {
        let event: Event = serde_json::from_value(json!({
            "id": "22249084947",
            "type": "PushEvent",
            "actor": { "login": "octocat" },
            "repo": { "id": 1296269, "name": "octocat/Hello-World" },
            "payload": {
                "ref": "refs/heads/master",
                "commits": [
                    { "sha": "7638417db6d59f3c431d3e1f261cc637155684cd", "message": "Fix all the bugs\n\nFor real" },
                    { "sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e", "message": "Add README" }
                ]
            },
            "public": true
        }))
        .unwrap();

        assert_eq!(event.kind(), EventKind::Push);
        assert_eq!(event.repo.name, "octocat/Hello-World");
        assert_eq!(event.payload.r#ref, "refs/heads/master");
        assert_eq!(event.payload.commits.len(), 2);
        assert_eq!(event.payload.commits[1].message, "Add README");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let event: Event = serde_json::from_value(json!({ "type": "WatchEvent" })).unwrap();

        assert_eq!(event.kind(), EventKind::Watch);
        assert_eq!(event.repo, Repo::default());
        assert_eq!(event.payload, Payload::default());
    }

    #[test]
    fn null_fields_default_to_empty() {
        let event: Event = serde_json::from_value(json!({
            "type": "CreateEvent",
            "repo": { "name": null },
            "payload": { "ref": null, "ref_type": "repository", "commits": null }
        }))
        .unwrap();

        assert_eq!(event.repo.name, "");
        assert_eq!(event.payload.r#ref, "");
        assert_eq!(event.payload.ref_type, "repository");
        assert!(event.payload.commits.is_empty());

        let event: Event = serde_json::from_value(json!({ "type": null, "payload": null })).unwrap();
        assert_eq!(event, Event::default());
    }

    #[test]
    fn unknown_types_are_kept() {
        assert_eq!(EventKind::from_type("IssuesEvent"), EventKind::Other("IssuesEvent"));
        assert_eq!(EventKind::from_type(""), EventKind::Other(""));
        assert_eq!(EventKind::from_type("ForkEvent"), EventKind::Fork);
        assert_eq!(EventKind::from_type("CreateEvent"), EventKind::Create);
    }

    #[test]
    fn repo_display_wraps_name() {
        let repo = Repo {
            name: "octocat/Hello-World".to_owned(),
        };
        assert_eq!(repo.to_string(), "{octocat/Hello-World}");
    }
}
