use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const NAME_MAX: usize = 100;
pub const MESSAGE_MIN: usize = 10;
pub const MESSAGE_MAX: usize = 2000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Company,
    Message,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("{0:?} is required")]
    Required(Field),
    #[error("{field:?} must be at most {max} characters")]
    TooLong { field: Field, max: usize },
    #[error("{field:?} must be at least {min} characters")]
    TooShort { field: Field, min: usize },
    #[error("email address is not valid")]
    InvalidEmail,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::Required(field)
            | FieldError::TooLong { field, .. }
            | FieldError::TooShort { field, .. } => *field,
            FieldError::InvalidEmail => Field::Email,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl ContactForm {
    /// All problems with the form, in field order.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(FieldError::Required(Field::Name));
        } else if name.chars().count() > NAME_MAX {
            errors.push(FieldError::TooLong {
                field: Field::Name,
                max: NAME_MAX,
            });
        }

        if let Err(err) = validate_email(&self.email) {
            errors.push(err);
        }

        if self.company.trim().chars().count() > NAME_MAX {
            errors.push(FieldError::TooLong {
                field: Field::Company,
                max: NAME_MAX,
            });
        }

        let message = self.message.trim();
        let len = message.chars().count();
        if message.is_empty() {
            errors.push(FieldError::Required(Field::Message));
        } else if len < MESSAGE_MIN {
            errors.push(FieldError::TooShort {
                field: Field::Message,
                min: MESSAGE_MIN,
            });
        } else if len > MESSAGE_MAX {
            errors.push(FieldError::TooLong {
                field: Field::Message,
                max: MESSAGE_MAX,
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Shape check only: one `@`, non-empty local part, dotted domain, no spaces.
pub fn validate_email(raw: &str) -> Result<(), FieldError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(FieldError::Required(Field::Email));
    }
    let Some((local, domain)) = email.split_once('@') else {
        return Err(FieldError::InvalidEmail);
    };
    let valid = !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain.contains('.')
        && domain.split('.').all(|part| !part.is_empty());
    if valid {
        Ok(())
    } else {
        Err(FieldError::InvalidEmail)
    }
}
