//! # Field presence for partial updates
//!
//! A JSON merge-patch body has to tell three situations apart for every field:
//! the client did not mention it, the client sent `null`, or the client sent a
//! value. A plain `Option<T>` collapses the first two, so PATCH models wrap
//! each field in [`Patch<T>`] instead.
//!
//! ```rust,ignore
//! #[derive(Deserialize, Serialize)]
//! pub struct PersonPatch {
//!     #[serde(default, skip_serializing_if = "Patch::is_absent")]
//!     pub email: Patch<String>,
//! }
//!
//! // {}                 -> email: Patch::Absent  (leave the column alone)
//! // {"email": null}    -> email: Patch::Null    (clear the column)
//! // {"email": "a@b.c"} -> email: Patch::Value(..)
//! ```
//!
//! Serialization is the inverse: `Absent` is skipped by the field attribute,
//! `Null` is written as `null` and `Value` as the value itself.

use sea_orm::{ActiveValue, Value};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error raised while merging a patch into a persisted record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatchError {
    /// `null` was sent for a column that cannot hold it.
    #[error("field '{field}' is required and cannot be set to null")]
    NullOnRequired { field: &'static str },
}

/// Tri-state field wrapper used by PATCH models.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Patch<T> {
    /// Key omitted from the payload.
    Absent,
    /// Key present with an explicit `null`.
    Null,
    /// Key present with a value.
    Value(T),
}

impl<T> Patch<T> {
    #[must_use]
    pub const fn unset() -> Self {
        Self::Absent
    }

    /// `None` becomes an explicit null, `Some(v)` a present value.
    #[must_use]
    pub fn of(value: Option<T>) -> Self {
        value.map_or(Self::Null, Self::Value)
    }

    #[must_use]
    pub const fn is_set(&self) -> bool {
        !self.is_absent()
    }

    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn as_ref(&self) -> Patch<&T> {
        match self {
            Self::Absent => Patch::Absent,
            Self::Null => Patch::Null,
            Self::Value(value) => Patch::Value(value),
        }
    }

    /// The contained value; both `Null` and `Absent` read as `None`.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Null | Self::Absent => None,
        }
    }

    #[must_use]
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        self.into_option().unwrap_or_default()
    }

    /// Merge into a non-nullable column.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::NullOnRequired`] when the patch carries an explicit null.
    pub fn merge_required(
        self,
        target: &mut ActiveValue<T>,
        field: &'static str,
    ) -> Result<(), PatchError>
    where
        T: Into<Value>,
    {
        match self {
            Self::Absent => Ok(()),
            Self::Null => Err(PatchError::NullOnRequired { field }),
            Self::Value(value) => {
                *target = ActiveValue::Set(value);
                Ok(())
            }
        }
    }

    /// Merge into a nullable column; `Null` clears it.
    pub fn merge_nullable(self, target: &mut ActiveValue<Option<T>>)
    where
        Option<T>: Into<Value>,
    {
        match self {
            Self::Absent => {}
            Self::Null => *target = ActiveValue::Set(None),
            Self::Value(value) => *target = ActiveValue::Set(Some(value)),
        }
    }
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        Self::of(value)
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Value(value) => serializer.serialize_some(value),
            // `Absent` only reaches here when the field lacks `skip_serializing_if`
            Self::Null | Self::Absent => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only called when the key is present; a missing key falls back to `Default`.
        Option::<T>::deserialize(deserializer).map(Self::of)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Body<T> {
        #[serde(default, skip_serializing_if = "Patch::is_absent")]
        field: Patch<T>,
    }

    fn round_trip<T>(field: Patch<T>) -> Patch<T>
    where
        T: Serialize + for<'de> Deserialize<'de> + Default,
    {
        let encoded = serde_json::to_string(&Body { field }).unwrap();
        serde_json::from_str::<Body<T>>(&encoded).unwrap().field
    }

    #[test]
    fn test_constructors() {
        assert!(Patch::<i32>::unset().is_absent());
        assert!(Patch::<i32>::of(None).is_null());
        assert_eq!(Patch::of(Some(3)), Patch::Value(3));
        assert_eq!(Patch::<i32>::default(), Patch::Absent);
    }

    #[test]
    fn test_is_set() {
        assert!(!Patch::<String>::unset().is_set());
        assert!(Patch::<String>::of(None).is_set());
        assert!(Patch::of(Some(String::new())).is_set());
    }

    #[test]
    fn test_value_or_default_never_fails() {
        assert_eq!(Patch::<i32>::unset().value_or_default(), 0);
        assert_eq!(Patch::<i32>::of(None).value_or_default(), 0);
        assert_eq!(Patch::of(Some(7)).value_or_default(), 7);
        assert_eq!(Patch::of(Some("x".to_string())).into_option().as_deref(), Some("x"));
    }

    #[test]
    fn test_missing_key_is_absent() {
        let body: Body<String> = serde_json::from_value(json!({})).unwrap();
        assert_eq!(body.field, Patch::Absent);
    }

    #[test]
    fn test_null_key_is_null() {
        let body: Body<String> = serde_json::from_value(json!({"field": null})).unwrap();
        assert_eq!(body.field, Patch::Null);
    }

    #[test]
    fn test_value_key_is_value() {
        let body: Body<String> = serde_json::from_value(json!({"field": "Ana"})).unwrap();
        assert_eq!(body.field, Patch::Value("Ana".to_string()));
    }

    #[test]
    fn test_wrong_token_type_is_rejected() {
        let result = serde_json::from_value::<Body<i32>>(json!({"field": "not a number"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_omits_absent_and_keeps_null() {
        let absent = serde_json::to_value(Body::<i32> { field: Patch::Absent }).unwrap();
        assert_eq!(absent, json!({}));

        let null = serde_json::to_value(Body::<i32> { field: Patch::Null }).unwrap();
        assert_eq!(null, json!({"field": null}));

        let value = serde_json::to_value(Body { field: Patch::Value(5) }).unwrap();
        assert_eq!(value, json!({"field": 5}));
    }

    #[test]
    fn test_round_trip_keeps_state() {
        assert_eq!(round_trip::<String>(Patch::Absent), Patch::Absent);
        assert_eq!(round_trip::<String>(Patch::Null), Patch::Null);
        assert_eq!(round_trip(Patch::Value("Ana".to_string())), Patch::Value("Ana".to_string()));
    }

    #[test]
    fn test_round_trip_falsy_values_stay_present() {
        assert_eq!(round_trip(Patch::Value(String::new())), Patch::Value(String::new()));
        assert_eq!(round_trip(Patch::Value(0_i64)), Patch::Value(0));
        assert_eq!(round_trip(Patch::Value(false)), Patch::Value(false));
    }

    #[test]
    fn test_merge_required() {
        let mut target = ActiveValue::Unchanged("old".to_string());

        Patch::Absent.merge_required(&mut target, "name").unwrap();
        assert_eq!(target, ActiveValue::Unchanged("old".to_string()));

        Patch::Value("new".to_string()).merge_required(&mut target, "name").unwrap();
        assert_eq!(target, ActiveValue::Set("new".to_string()));

        let err = Patch::<String>::Null.merge_required(&mut target, "name").unwrap_err();
        assert_eq!(err, PatchError::NullOnRequired { field: "name" });
        assert_eq!(target, ActiveValue::Set("new".to_string()));
    }

    #[test]
    fn test_merge_nullable() {
        let mut target = ActiveValue::Unchanged(Some("ana@example.com".to_string()));

        Patch::Absent.merge_nullable(&mut target);
        assert_eq!(target, ActiveValue::Unchanged(Some("ana@example.com".to_string())));

        Patch::<String>::Null.merge_nullable(&mut target);
        assert_eq!(target, ActiveValue::Set(None));

        Patch::Value("new@example.com".to_string()).merge_nullable(&mut target);
        assert_eq!(target, ActiveValue::Set(Some("new@example.com".to_string())));
    }

    #[test]
    fn test_error_message_names_field() {
        let err = PatchError::NullOnRequired { field: "username" };
        assert_eq!(
            err.to_string(),
            "field 'username' is required and cannot be set to null"
        );
    }
}
