use crate::db::db::Db;
use crate::libs::error::AppResult;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

pub const USER_KEY: &str = "current";

const SELECT_USER: &str = "SELECT uid, display_name, email, photo_url, created_at, last_login FROM user WHERE id = ?1";
const UPSERT_USER: &str = "INSERT OR REPLACE INTO user (id, uid, display_name, email, photo_url, created_at, last_login)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const DELETE_USER: &str = "DELETE FROM user WHERE id = ?1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub uid: String,
    pub display_name: String,
    pub email: Option<String>,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
}

pub struct Users<'a> {
    conn: &'a Connection,
}

impl<'a> Users<'a> {
    pub fn new(db: &'a Db) -> Self {
        Users { conn: &db.conn }
    }

    pub fn get(&self) -> AppResult<Option<UserRecord>> {
        let user = self
            .conn
            .query_row(SELECT_USER, params![USER_KEY], |row| {
                let created_at: String = row.get(4)?;
                let last_login: String = row.get(5)?;
                Ok(UserRecord {
                    uid: row.get(0)?,
                    display_name: row.get(1)?,
                    email: row.get(2)?,
                    photo_url: row.get(3)?,
                    created_at: parse_timestamp(&created_at),
                    last_login: parse_timestamp(&last_login),
                })
            })
            .optional()?;
        Ok(user)
    }

    pub fn save(&self, user: &UserRecord) -> AppResult<()> {
        self.conn.execute(
            UPSERT_USER,
            params![
                USER_KEY,
                user.uid,
                user.display_name,
                user.email,
                user.photo_url,
                user.created_at.to_rfc3339(),
                user.last_login.to_rfc3339()
            ],
        )?;
        Ok(())
    }

    pub fn delete(&self) -> AppResult<()> {
        self.conn.execute(DELETE_USER, params![USER_KEY])?;
        Ok(())
    }
}

fn parse_timestamp(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}
