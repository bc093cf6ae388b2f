use serde::Deserialize;

use super::repo_types::NewUser;

/// Form body for registration.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Form body for login.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl From<RegisterForm> for NewUser {
    fn from(form: RegisterForm) -> Self {
        Self {
            username: form.username,
            email: form.email,
            password: form.password,
        }
    }
}
