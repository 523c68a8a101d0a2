//! User domain models.
//!
//! A user is one draw participant: a name, an email, a class tier, a draw
//! number (priority rank within the tier), and optionally the room they have
//! been placed in. Preplaced users are inserted from the housing office's
//! spreadsheet and carry no tier or draw number.

use crate::ids::{RoomId, UserId};
use serde::{Deserialize, Serialize};
use sqlx::postgres::{PgHasArrayType, PgTypeInfo};
use sqlx::{Database, Decode, Encode, FromRow, Type};
use std::fmt;
use std::str::FromStr;

/// Class tier of a draw participant.
///
/// Seniors, juniors, and sophomores take part in the draw; freshmen only
/// appear in registrar exports and are placed separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassYear {
    Senior,
    Junior,
    Sophomore,
    Freshman,
}

impl ClassYear {
    /// The lowercase form stored in the `year` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Senior => "senior",
            Self::Junior => "junior",
            Self::Sophomore => "sophomore",
            Self::Freshman => "freshman",
        }
    }

    /// Maps a registrar year code (`SR`, `JR`, `SO`, `FR`) to a tier.
    pub fn from_registrar_code(code: &str) -> Option<Self> {
        match code.trim() {
            "SR" => Some(Self::Senior),
            "JR" => Some(Self::Junior),
            "SO" => Some(Self::Sophomore),
            "FR" => Some(Self::Freshman),
            _ => None,
        }
    }
}

impl fmt::Display for ClassYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized class year string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseClassYearError(pub String);

impl fmt::Display for ParseClassYearError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized class year: {:?}", self.0)
    }
}

impl std::error::Error for ParseClassYearError {}

impl FromStr for ClassYear {
    type Err = ParseClassYearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "senior" => Ok(Self::Senior),
            "junior" => Ok(Self::Junior),
            "sophomore" => Ok(Self::Sophomore),
            "freshman" => Ok(Self::Freshman),
            other => Err(ParseClassYearError(other.to_string())),
        }
    }
}

impl Type<sqlx::Postgres> for ClassYear {
    fn type_info() -> PgTypeInfo {
        <String as Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <String as Type<sqlx::Postgres>>::compatible(ty)
    }
}

impl<'q> Encode<'q, sqlx::Postgres> for ClassYear {
    fn encode_by_ref(
        &self,
        buf: &mut <sqlx::Postgres as Database>::ArgumentBuffer<'q>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as Encode<'q, sqlx::Postgres>>::encode_by_ref(&self.as_str().to_string(), buf)
    }
}

impl<'r> Decode<'r, sqlx::Postgres> for ClassYear {
    fn decode(
        value: <sqlx::Postgres as Database>::ValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as Decode<'r, sqlx::Postgres>>::decode(value)?;
        Ok(s.parse()?)
    }
}

impl PgHasArrayType for ClassYear {
    fn array_type_info() -> PgTypeInfo {
        <String as PgHasArrayType>::array_type_info()
    }
}

/// A draw participant.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Class tier; `None` for preplaced users inserted without one.
    pub year: Option<ClassYear>,
    /// Priority rank within the tier. Fractional values are used for manual
    /// insertions between two existing ranks.
    pub draw_number: f64,
    pub preplaced: bool,
    /// Dorm id of an in-dorm preference (seniors only), 0 for none.
    pub in_dorm: i32,
    /// `proctor`, `mentor`, or `none`.
    pub reslife_role: String,
    /// Room this user has been placed in, if any.
    pub room_uuid: Option<RoomId>,
}

impl User {
    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether the user still needs a room.
    pub fn is_unassigned(&self) -> bool {
        self.room_uuid.is_none()
    }
}
