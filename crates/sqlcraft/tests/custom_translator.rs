use sqlcraft::{Builder, QueryError, QueryResult, Statement, StatementType, Translator};

/// Renders any statement whose type is `NONSENSE`.
struct NonsenseTranslator;

impl Translator for NonsenseTranslator {
    fn accepts(&self, statement: &Statement) -> bool {
        statement.kind().as_str() == "NONSENSE"
    }

    fn translate(&self, _statement: &Statement) -> QueryResult<String> {
        Ok("Nonsense query!".to_string())
    }
}

/// Claims SELECT statements, but should never win against the default.
struct ShadowSelect;

impl Translator for ShadowSelect {
    fn accepts(&self, statement: &Statement) -> bool {
        *statement.kind() == StatementType::Select
    }

    fn translate(&self, _statement: &Statement) -> QueryResult<String> {
        Ok("shadowed".to_string())
    }
}

#[test]
fn unknown_type_without_custom_translator() {
    let err = Builder::mysql()
        .build(&Statement::new("NONSENSE", "users", None))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Could not find suitable translator for query with type: NONSENSE"
    );
    assert!(matches!(err, QueryError::UnsupportedStatementType(_)));
}

#[test]
fn custom_translator_handles_unknown_type() {
    let builder = Builder::mysql().with_translator(NonsenseTranslator);
    assert_eq!(
        builder
            .build(&Statement::new("NONSENSE", "users", None))
            .unwrap(),
        "Nonsense query!"
    );
}

#[test]
fn defaults_win_over_custom_translators() {
    let mut builder = Builder::mysql();
    builder.push_translator(ShadowSelect);
    assert_eq!(
        builder.build(&Statement::select("users")).unwrap(),
        "SELECT * FROM `users`"
    );
    assert_eq!(builder.translators().count(), 5);
}

#[test]
fn custom_quoter() {
    let builder = Builder::new(|value: &str| format!("'{}'", value.replace('\'', "''")));
    let mut query = Statement::select("users");
    query.and_where("name", "=", "O'Brien");
    assert_eq!(
        builder.build(&query).unwrap(),
        "SELECT * FROM `users` WHERE `users`.`name` = 'O''Brien'"
    );
}
