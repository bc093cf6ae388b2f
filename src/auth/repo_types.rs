use sqlx::FromRow;

/// Row of the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub username: String,             // display name, never checked
    pub email: String,                // login identifier, not unique
    pub password: String,             // stored as submitted
}

/// Values inserted on registration.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}
