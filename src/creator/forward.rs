use serde::Deserialize;
use serde_json::Value;
use simple_error::SimpleError;

use crate::common::factory::Factory;

use super::{interface::Creators, kind::CreatorKind};

/// Accepted shapes: `"multi_select"` or `{"kind": "multi_select"}`
#[derive(Deserialize)]
#[serde(untagged)]
enum CreatorDescriptor {
    Bare(String),
    Tagged { kind: String },
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CreatorForward;

impl CreatorForward {
    /// Creates an instance of [CreatorForward]
    /// ```
    /// use input_text_factory::common::factory::Factory;
    /// use input_text_factory::creator::{CreatorForward, CreatorKind};
    ///
    /// let forward_factory = CreatorForward::new();
    /// let creator = forward_factory.generate(serde_json::json!({"kind": "simple"})).unwrap();
    /// assert_eq!(creator.kind(), CreatorKind::Simple);
    /// ```
    pub fn new() -> Self {
        CreatorForward {}
    }
}

impl Factory<Creators> for CreatorForward {
    /// Generates a creator by forwarding the kind named in a json value
    fn generate(&self, args: Value) -> Result<Creators, SimpleError> {
        let descriptor = serde_json::from_value::<CreatorDescriptor>(args.clone())
            .map_err(|err| SimpleError::new(format!("malformed creator descriptor {args}: {err}")))?;
        let name = match descriptor {
            CreatorDescriptor::Bare(name) => name,
            CreatorDescriptor::Tagged { kind } => kind,
        };
        let kind = name.parse::<CreatorKind>()?;
        log::trace!("forwarded {args} to {kind} creator");
        Ok(kind.into())
    }
}
