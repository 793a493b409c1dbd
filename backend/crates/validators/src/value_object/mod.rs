//! Value Object Module

pub mod age;
pub mod email;
pub mod name;

pub use age::{Age, AgeError};
pub use email::{Email, EmailError};
pub use name::{NAME_MAX_LENGTH, NAME_MIN_LENGTH, Name, NameError};
