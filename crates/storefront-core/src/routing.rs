use crate::constants::{CONTACTS_ANCHOR, CONTACTS_PANEL};

/// Relative or absolute panel navigation, used by keyboard bindings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Previous,
    First,
    Last,
}

/// A URL fragment that jumps to a fixed panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashRoute {
    pub anchor: String,
    pub panel: usize,
}

impl HashRoute {
    pub fn new(anchor: impl Into<String>, panel: usize) -> Self {
        Self {
            anchor: anchor.into(),
            panel,
        }
    }
}

pub fn default_routes() -> Vec<HashRoute> {
    vec![HashRoute::new(CONTACTS_ANCHOR, CONTACTS_PANEL)]
}

/// Panel for a `location.hash` value, with or without the leading `#`.
pub fn panel_for_hash(hash: &str, routes: &[HashRoute]) -> Option<usize> {
    let anchor = hash.strip_prefix('#').unwrap_or(hash);
    if anchor.is_empty() {
        return None;
    }
    routes.iter().find(|r| r.anchor == anchor).map(|r| r.panel)
}
