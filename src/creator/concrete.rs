//! Concrete creators. Each one overrides only the factory method.

use crate::product::{InputTextMultiSelect, InputTextSimple, Products};

use super::interface::CreateInputText;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SimpleCreator;

impl CreateInputText for SimpleCreator {
    fn create_product(&self) -> Products {
        InputTextSimple.into()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MultiSelectCreator;

impl CreateInputText for MultiSelectCreator {
    fn create_product(&self) -> Products {
        InputTextMultiSelect.into()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::product::BuildInputText;

    #[test]
    fn concrete_creators_pick_their_product() {
        assert_eq!(SimpleCreator.create_product().build().name, "InputTextSimple");
        assert_eq!(
            MultiSelectCreator.create_product().build().name,
            "InputTextMultySelect"
        );
    }
}
