use std::fmt;

use demo_kit::{FieldError, Validate};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Operands of the addition endpoint.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AddParams {
    /// Left operand.
    pub a: i32,
    /// Right operand.
    pub b: i32,
}

impl AddParams {
    /// 32-bit two's complement sum; overflow wraps instead of panicking.
    pub fn sum(&self) -> i32 {
        self.a.wrapping_add(self.b)
    }
}

/// Credentials submitted to the login endpoint.
#[derive(Clone, Deserialize, ToSchema)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl Validate for LoginForm {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut violations = Vec::new();
        if self.email.trim().is_empty() {
            violations.push(FieldError::new("email", "must not be blank"));
        }
        if self.password.is_empty() {
            violations.push(FieldError::new("password", "must not be empty"));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
