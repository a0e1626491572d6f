use serde_json::Value;
use simple_error::SimpleError;

/// Generates a `T` out of a loosely typed JSON description.
pub trait Factory<T> {
    fn generate(&self, args: Value) -> Result<T, SimpleError>;
}
