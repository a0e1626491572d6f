pub mod interface;
pub mod simple;
pub mod multi_select;

pub use interface::{BuildInputText, InputText, Products};
pub use multi_select::InputTextMultiSelect;
pub use simple::InputTextSimple;
