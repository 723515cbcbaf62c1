use chrono::{TimeZone, Utc};
use serde::Serialize;
use sqlcraft::{Builder, QueryError, Statement, ValueSet};

#[derive(Serialize)]
struct NewUser {
    id: uuid::Uuid,
    username: String,
    created_at: chrono::DateTime<Utc>,
    nickname: Option<String>,
}

#[test]
fn insert_from_serializable_rows() {
    let id = uuid::Uuid::nil();
    let created_at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();

    let rows = ["amy", "tom"].map(|name| NewUser {
        id,
        username: name.to_string(),
        created_at,
        nickname: None,
    });

    let mut query = Statement::insert("users");
    for row in &rows {
        query.add_value_set(ValueSet::from_serialize(row).unwrap());
    }

    assert_eq!(
        Builder::mysql().build(&query).unwrap(),
        "INSERT INTO `users` (`id`, `username`, `created_at`, `nickname`) VALUES \
         ('00000000-0000-0000-0000-000000000000', 'amy', '2024-01-02T03:04:05Z', NULL), \
         ('00000000-0000-0000-0000-000000000000', 'tom', '2024-01-02T03:04:05Z', NULL)"
    );
}

#[test]
fn update_from_serializable_row() {
    #[derive(Serialize)]
    struct Rename<'a> {
        username: &'a str,
    }

    let mut query = Statement::update("users");
    query
        .add_value_set(ValueSet::from_serialize(&Rename { username: "amy" }).unwrap())
        .and_where("id", "=", 7);
    assert_eq!(
        Builder::mysql().build(&query).unwrap(),
        "UPDATE `users` SET `username` = 'amy' WHERE `users`.`id` = 7"
    );
}

#[test]
fn nested_values_are_rejected() {
    #[derive(Serialize)]
    struct WithTags {
        tags: Vec<&'static str>,
    }

    let err = ValueSet::from_serialize(&WithTags { tags: vec!["a"] }).unwrap_err();
    assert_eq!(err, QueryError::InvalidValueType { type_name: "array" });
}

#[test]
fn mismatched_rows_name_expected_keys() {
    let mut query = Statement::insert("users");
    query
        .add_value_set(ValueSet::from_pairs([("username", "x")]).unwrap())
        .add_value_set(ValueSet::from_pairs([("password", "y")]).unwrap());
    let err = Builder::mysql().build(&query).unwrap_err();
    assert_eq!(
        err,
        QueryError::ValueSetKeyMismatch {
            expected: vec!["username".into()]
        }
    );
}
