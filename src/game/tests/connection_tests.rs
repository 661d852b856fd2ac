//! Unit tests for libpq connection strings.

use rstest::rstest;

use crate::config::DatabaseSettings;
use crate::game::adapters::postgres::ConnectionString;

#[rstest]
fn defaults_render_every_keyword() {
    let connection = ConnectionString::from_settings(&DatabaseSettings::default());

    assert_eq!(
        connection.as_str(),
        "host='localhost' port='5432' user='postgres' password='' dbname='my_database' sslmode='disable'"
    );
}

#[rstest]
#[case("it's", "password='it\\'s'")]
#[case("back\\slash", "password='back\\\\slash'")]
#[case("with space", "password='with space'")]
fn password_is_quoted_and_escaped(#[case] password: &str, #[case] expected: &str) {
    let settings = DatabaseSettings {
        password: password.to_owned(),
        ..DatabaseSettings::default()
    };

    let connection = ConnectionString::from_settings(&settings);

    assert!(
        connection.as_str().contains(expected),
        "{expected} missing from rendered connection string"
    );
}

#[rstest]
fn debug_output_hides_credentials() {
    let settings = DatabaseSettings {
        password: "hunter2".to_owned(),
        ..DatabaseSettings::default()
    };

    let rendered = format!("{:?}", ConnectionString::from_settings(&settings));

    assert!(!rendered.contains("hunter2"));
}
