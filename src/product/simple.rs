use super::interface::{BuildInputText, InputText};

pub const SIMPLE_NAME: &str = "InputTextSimple";

/// A plain named text field.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InputTextSimple;

impl BuildInputText for InputTextSimple {
    fn build(&self) -> InputText {
        InputText {
            name: SIMPLE_NAME.to_string(),
            ..Default::default()
        }
    }
}
