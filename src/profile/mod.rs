//! The contact/interest data collected from the user before chatting.

pub mod validate;
pub use validate::{FieldError, is_valid_contact_number, is_valid_email, validate};

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub contact_number: String,
    pub area_of_interest: String,
    pub course: String,
    pub training_mode: String,
    pub contact_mode: String,
}
