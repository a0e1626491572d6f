//! The client only knows creators through [CreateInputText]; any creator
//! can be handed to [client_code].

use serde::{Deserialize, Serialize};

use crate::{
    creator::{CreateInputText, CreatorKind, Creators},
    product::{BuildInputText, InputText},
};

/// The view of an [InputText] handed to the UI layer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct InputTextUI {
    pub id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl InputTextUI {
    /// Copies `name` and `options` verbatim; everything else stays default.
    pub fn project(input: &InputText) -> Self {
        Self {
            name: input.name.clone(),
            options: input.options.clone(),
            ..Default::default()
        }
    }
}

impl From<InputText> for InputTextUI {
    fn from(input: InputText) -> Self {
        Self {
            name: input.name,
            options: input.options,
            ..Default::default()
        }
    }
}

/// Builds the product once and projects it.
pub fn client_code<C: CreateInputText>(creator: &C) -> InputTextUI {
    creator.create_product().build().into()
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ClientInputText;

impl ClientInputText {
    pub fn new() -> Self {
        ClientInputText {}
    }

    pub fn main_simple(&self) -> InputTextUI {
        self.run(CreatorKind::Simple)
    }

    pub fn main_multi_select(&self) -> InputTextUI {
        self.run(CreatorKind::MultiSelect)
    }

    /// Runs the path of one creator kind
    /// ```
    /// use input_text_factory::client::ClientInputText;
    /// use input_text_factory::creator::CreatorKind;
    ///
    /// let ui = ClientInputText::new().run(CreatorKind::MultiSelect);
    /// assert_eq!(ui.name, "InputTextMultySelect");
    /// assert_eq!(ui.options.map(|opts| opts.len()), Some(2));
    /// ```
    pub fn run(&self, kind: CreatorKind) -> InputTextUI {
        let creator = Creators::from(kind);
        let ui = client_code(&creator);
        if log::log_enabled!(log::Level::Debug) {
            let json = serde_json::to_string(&ui).unwrap_or_else(|err| err.to_string());
            log::debug!("{kind} creator projected {json}");
        }
        ui
    }

    /// Runs every creator kind in [CreatorKind::ALL] order.
    pub fn run_all(&self) -> Vec<(CreatorKind, InputTextUI)> {
        CreatorKind::ALL
            .iter()
            .map(|kind| (*kind, self.run(*kind)))
            .collect()
    }
}
