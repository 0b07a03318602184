use super::ColumnType::*;
use super::{Column, Entity};

pub const USERNAME: &str = "Username";
pub const PASSWORD: &str = "Password";
pub const CREATED_AT: &str = "created_at";

pub static USERS: Entity = Entity {
    name: "User",
    path: "users",
    table: "users",
    key: "id",
    columns: &[
        Column::new(USERNAME, Text).required(),
        Column::new(PASSWORD, Password).required(),
        Column::new("email", Text),
        Column::new("role_id", Int),
        Column::new("IsActive", Flag),
        Column::new("FullName", Text),
        Column::new("Phone", Text),
        Column::new(CREATED_AT, DateTime),
    ],
    list_limit: None,
    lookups: &[],
};
