use std::fmt;

use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};

use super::{multi_select::InputTextMultiSelect, simple::InputTextSimple};

/// The record every product builds.
///
/// No product sets `id` or `value`; they stay at their defaults.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct InputText {
    pub id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub name: String,
    /// Selectable entries, present only for multi-select fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl fmt::Display for InputText {
    /// ```
    /// use input_text_factory::product::*;
    ///
    /// assert_eq!(InputTextSimple.build().to_string(), "InputText(InputTextSimple)");
    /// assert_eq!(
    ///     InputTextMultiSelect.build().to_string(),
    ///     "InputText(InputTextMultySelect [NameFirst, NameSecond])"
    /// );
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InputText({}", self.name)?;
        if let Some(options) = &self.options {
            write!(f, " [{}]", options.join(", "))?;
        }
        write!(f, ")")
    }
}

#[enum_dispatch]
pub trait BuildInputText {
    /// Builds a fresh [InputText] describing this kind of field.
    /// Calling it again yields an identical record.
    fn build(&self) -> InputText;
}

/// Every product a creator may hand out.
#[enum_dispatch(BuildInputText)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Products {
    InputTextSimple,
    InputTextMultiSelect,
}
