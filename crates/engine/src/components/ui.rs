use crate::prelude::*;

/// A visual placed by its `RectTransform`; only the enabled flag matters here
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Image {
    pub enabled: bool,
}

#[derive(Component, Clone, Debug, Default, PartialEq, Eq)]
pub struct Text {
    pub value: String,
}

/// Marks the text shown in the window title
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct TitleText;
