pub mod interface;
pub mod concrete;
pub mod kind;
pub mod forward;

pub use concrete::{MultiSelectCreator, SimpleCreator};
pub use forward::CreatorForward;
pub use interface::{CreateInputText, Creators};
pub use kind::CreatorKind;
