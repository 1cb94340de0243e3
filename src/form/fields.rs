use std::collections::BTreeMap;

use crate::command::{Endpoint, Patterns, Settings, TransferRequest};

pub const SOURCE_PATH: &str = "src[path]";
pub const CONTENTS: &str = "setting[contents]";

/// Split `group[key]` into its two parts. Only ASCII letters are allowed
/// and nothing may follow the closing bracket.
pub fn parse_field_name(name: &str) -> Option<(&str, &str)> {
    let (group, rest) = name.split_once('[')?;
    let key = rest.strip_suffix(']')?;
    let is_word = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphabetic());
    if is_word(group) && is_word(key) {
        Some((group, key))
    } else {
        None
    }
}

/// Serialized form values keyed by group, then by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    groups: BTreeMap<String, BTreeMap<String, String>>,
}

impl FieldMap {
    /// Collects `(name, value)` pairs in form order. Names that are not
    /// `group[key]` are skipped and a repeated name keeps its last value.
    pub fn from_pairs<I, N, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: AsRef<str>,
        V: Into<String>,
    {
        let mut map = FieldMap::default();
        for (name, value) in pairs {
            match parse_field_name(name.as_ref()) {
                Some((group, key)) => map.insert(group, key, value.into()),
                None => log::trace!("skipping form field {:?}", name.as_ref()),
            }
        }
        map
    }

    pub fn get(&self, group: &str, key: &str) -> Option<&str> {
        self.groups.get(group)?.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, group: &str, key: &str, value: String) {
        self.groups
            .entry(group.to_string())
            .or_default()
            .insert(key.to_string(), value);
    }

    pub fn remove(&mut self, group: &str, key: &str) {
        if let Some(fields) = self.groups.get_mut(group) {
            fields.remove(key);
        }
    }

    fn text(&self, group: &str, key: &str) -> String {
        self.get(group, key).unwrap_or_default().to_string()
    }

    /// A checkbox only shows up in the form data when it is checked.
    pub fn flag(&self, group: &str, key: &str) -> bool {
        self.get(group, key).is_some_and(|value| !value.is_empty())
    }

    fn endpoint(&self, group: &str) -> Endpoint {
        Endpoint {
            login: self.text(group, "login"),
            host: self.text(group, "host"),
            path: self.text(group, "path"),
        }
    }

    pub fn to_request(&self) -> TransferRequest {
        TransferRequest {
            source: self.endpoint("src"),
            destination: self.endpoint("dest"),
            exclude: Patterns::Text(self.text("ignore", "exclude")),
            include: Patterns::Text(self.text("ignore", "include")),
            settings: Settings {
                port: self.text("setting", "port"),
                contents: self.flag("setting", "contents"),
                compress: self.flag("setting", "compress"),
                archive: self.flag("setting", "archive"),
                delete_extraneous: self.flag("setting", "extraneous"),
                recursive: self.flag("setting", "recursive"),
                dirs: self.flag("setting", "dirs"),
            },
        }
    }
}
