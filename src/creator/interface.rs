use enum_dispatch::enum_dispatch;

use crate::product::{BuildInputText, Products};

use super::concrete::{MultiSelectCreator, SimpleCreator};

/// A creator owns the factory method: it decides which [Products] variant
/// gets built while the code using it only ever sees [Products].
#[enum_dispatch]
pub trait CreateInputText {
    /// The factory method.
    fn create_product(&self) -> Products;

    /// Creator-side logic that works with whatever product the factory
    /// method hands out.
    /// ```
    /// use input_text_factory::creator::*;
    ///
    /// let creators: Creators = SimpleCreator.into();
    /// assert_eq!(
    ///     creators.describe(),
    ///     "Creator: The same creator's code has just worked with InputText(InputTextSimple)"
    /// );
    /// ```
    fn describe(&self) -> String {
        let built = self.create_product().build();
        format!("Creator: The same creator's code has just worked with {built}")
    }
}

#[enum_dispatch(CreateInputText)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Creators {
    SimpleCreator,
    MultiSelectCreator,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::product::{InputTextMultiSelect, InputTextSimple};

    #[test]
    fn creators_forward_factory_method() {
        let simple: Creators = SimpleCreator.into();
        let multi: Creators = MultiSelectCreator.into();
        assert_eq!(simple.create_product(), Products::from(InputTextSimple));
        assert_eq!(multi.create_product(), Products::from(InputTextMultiSelect));
    }

    #[test]
    fn describe_embeds_product() {
        let described = Creators::from(MultiSelectCreator).describe();
        log::info!("describe: {described}");
        assert!(described.starts_with("Creator: "));
        assert!(described.contains("InputTextMultySelect"));
        assert!(described.contains("NameFirst, NameSecond"));
    }
}
