use crate::prelude::*;

/// Human readable entity name, used in logs
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct Tag {
    pub label: String,
}

impl Tag {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}
