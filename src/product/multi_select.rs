use super::interface::{BuildInputText, InputText};

// The misspelling is part of the published field name.
pub const MULTI_SELECT_NAME: &str = "InputTextMultySelect";
pub const MULTI_SELECT_OPTIONS: [&str; 2] = ["NameFirst", "NameSecond"];

/// A named field offering a fixed list of options to pick from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InputTextMultiSelect;

impl BuildInputText for InputTextMultiSelect {
    fn build(&self) -> InputText {
        InputText {
            name: MULTI_SELECT_NAME.to_string(),
            options: Some(MULTI_SELECT_OPTIONS.iter().map(|opt| opt.to_string()).collect()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn multi_select_has_ordered_options() {
        let built = InputTextMultiSelect.build();
        assert_eq!(built.name, "InputTextMultySelect");
        assert_eq!(
            built.options,
            Some(vec!["NameFirst".to_string(), "NameSecond".to_string()])
        );
    }

    #[test]
    fn multi_select_build_is_idempotent() {
        let first = InputTextMultiSelect.build();
        let second = InputTextMultiSelect.build();
        assert_eq!(first, second);
    }
}
