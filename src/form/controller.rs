use serde::Serialize;

use super::fields::{CONTENTS, FieldMap, SOURCE_PATH};
use crate::command::build_command_for;

/// The form field whose change triggered a preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// First render, before the user touched anything.
    Initial,
    SourcePath,
    Contents,
    Other,
}

impl Origin {
    pub fn from_field_name(name: Option<&str>) -> Self {
        match name {
            None | Some("") => Origin::Initial,
            Some(SOURCE_PATH) => Origin::SourcePath,
            Some(CONTENTS) => Origin::Contents,
            Some(_) => Origin::Other,
        }
    }
}

/// Source path and the "copy contents" checkbox, which follow the rsync
/// convention that a trailing slash means the directory's contents.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MirrorState {
    pub source_path: String,
    pub contents: bool,
}

/// Bring the path and the flag back in line after `origin` changed. The
/// side that changed wins. Returns `None` when nothing needs writing.
pub fn reconcile(state: &MirrorState, origin: Origin) -> Option<MirrorState> {
    let next = match origin {
        Origin::Initial | Origin::SourcePath => MirrorState {
            source_path: state.source_path.clone(),
            contents: state.source_path.ends_with('/'),
        },
        Origin::Contents => {
            let mut path = state
                .source_path
                .strip_suffix('/')
                .unwrap_or(&state.source_path)
                .to_string();
            if state.contents {
                path.push('/');
            }
            MirrorState {
                source_path: path,
                contents: state.contents,
            }
        }
        Origin::Other => return None,
    };

    (next != *state).then_some(next)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    pub command: String,
    pub source_path: String,
    pub contents: bool,
}

/// Rebuild the whole preview from the submitted form fields.
pub fn preview<I, N, V>(pairs: I, origin: Origin, program: &str) -> Preview
where
    I: IntoIterator<Item = (N, V)>,
    N: AsRef<str>,
    V: Into<String>,
{
    let mut fields = FieldMap::from_pairs(pairs);
    let mut state = MirrorState {
        source_path: fields.get("src", "path").unwrap_or_default().to_string(),
        contents: fields.flag("setting", "contents"),
    };

    if let Some(next) = reconcile(&state, origin) {
        log::debug!("{origin:?} changed mirror state {state:?} -> {next:?}");
        fields.insert("src", "path", next.source_path.clone());
        if next.contents {
            fields.insert("setting", "contents", "on".to_string());
        } else {
            fields.remove("setting", "contents");
        }
        state = next;
    }

    Preview {
        command: build_command_for(program, &fields.to_request()),
        source_path: state.source_path,
        contents: state.contents,
    }
}
