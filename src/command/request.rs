use serde::{Deserialize, Deserializer};

/// One side of the transfer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Endpoint {
    pub login: String,
    pub host: String,
    pub path: String,
}

impl Endpoint {
    /// `login@host:"path"`, `"path"`, or `None` when there is no path.
    pub fn token(&self) -> Option<String> {
        if self.path.is_empty() {
            return None;
        }
        if !self.login.is_empty() && !self.host.is_empty() {
            Some(format!(r#"{}@{}:"{}""#, self.login, self.host, self.path))
        } else {
            Some(format!(r#""{}""#, self.path))
        }
    }
}

/// Filter patterns, either raw textarea text or an already split list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Patterns {
    Text(String),
    List(Vec<String>),
}

impl Default for Patterns {
    fn default() -> Self {
        Patterns::List(Vec::new())
    }
}

impl Patterns {
    /// Patterns in input order. Text is split on line breaks and blank
    /// lines are dropped; list entries are used as given.
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            Patterns::Text(text) => text
                .split(['\r', '\n'])
                .filter(|line| !line.is_empty())
                .map(str::to_owned)
                .collect(),
            Patterns::List(list) => list.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(deserialize_with = "port_from_string_or_number")]
    pub port: String,
    /// Copy the contents of the source directory rather than the directory itself.
    pub contents: bool,
    pub compress: bool,
    pub archive: bool,
    #[serde(alias = "extraneous")]
    pub delete_extraneous: bool,
    pub recursive: bool,
    pub dirs: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TransferRequest {
    #[serde(alias = "src")]
    pub source: Endpoint,
    #[serde(alias = "dest")]
    pub destination: Endpoint,
    pub exclude: Patterns,
    pub include: Patterns,
    #[serde(alias = "setting")]
    pub settings: Settings,
}

fn port_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Port {
        Text(String),
        Number(u64),
    }

    Ok(match Option::<Port>::deserialize(deserializer)? {
        Some(Port::Text(port)) => port,
        Some(Port::Number(port)) => port.to_string(),
        None => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_patterns_split_on_any_line_break() {
        let patterns = Patterns::Text("*.tmp\r\n\r\n*.log\n.git\r".into());
        assert_eq!(patterns.to_vec(), vec!["*.tmp", "*.log", ".git"]);
    }

    #[test]
    fn list_patterns_are_kept_verbatim() {
        let patterns = Patterns::List(vec!["b".into(), "a".into()]);
        assert_eq!(patterns.to_vec(), vec!["b", "a"]);
    }

    #[test]
    fn endpoint_needs_path_for_remote_form() {
        let endpoint = Endpoint {
            login: "u".into(),
            host: "h".into(),
            path: String::new(),
        };
        assert_eq!(endpoint.token(), None);

        let endpoint = Endpoint {
            host: "h".into(),
            path: "/srv".into(),
            ..Default::default()
        };
        assert_eq!(endpoint.token().as_deref(), Some(r#""/srv""#));
    }

    #[test]
    fn json_accepts_aliases_and_numeric_port() {
        let request: TransferRequest = serde_json::from_value(serde_json::json!({
            "src": { "path": "/a/" },
            "exclude": "*.o\n*.a",
            "include": ["src/"],
            "setting": { "port": 2222, "extraneous": true }
        }))
        .unwrap();

        assert_eq!(request.source.path, "/a/");
        assert_eq!(request.exclude.to_vec(), vec!["*.o", "*.a"]);
        assert_eq!(request.include.to_vec(), vec!["src/"]);
        assert_eq!(request.settings.port, "2222");
        assert!(request.settings.delete_extraneous);
        assert!(!request.settings.compress);
    }

    #[test]
    fn empty_json_object_is_all_defaults() {
        let request: TransferRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, TransferRequest::default());
    }
}
