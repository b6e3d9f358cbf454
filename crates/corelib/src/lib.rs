//! Core value types shared by the model data graph: fixed-capacity string,
//! colors, operation errors.

pub mod color;
pub mod error;
pub mod string;

pub use color::{Color3, Color4};
pub use error::{CimError, CimResult};
pub use string::{CimString, MAX_LEN};
