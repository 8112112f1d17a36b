use chrono::{Datelike, Month, NaiveDate};

use crate::core::types::{
    parse_dob, parse_month_query, BirthdayForm, BirthdayRecord, NewBirthday, RecordId,
};

#[test]
fn test_record_from_wire() {
    let json = r#"{"_id":"64f1c2","name":"Alice","dob":"2000-01-05","email":"alice@example.com"}"#;
    let record: BirthdayRecord = serde_json::from_str(json).unwrap();

    assert_eq!(record.id, RecordId::new("64f1c2"));
    assert_eq!(record.name, "Alice");
    assert_eq!(record.dob, NaiveDate::from_ymd_opt(2000, 1, 5).unwrap());
    assert_eq!(record.email, "alice@example.com");
}

#[test]
fn test_record_accepts_plain_id_and_numeric_id() {
    let json = r#"{"id":42,"name":"Bob","dob":"1999-12-31","email":"bob@example.com"}"#;
    let record: BirthdayRecord = serde_json::from_str(json).unwrap();

    assert_eq!(record.id.as_str(), "42");
}

#[test]
fn test_record_with_timestamp_dob() {
    // Mid-month noon UTC stays in January in every timezone
    let json = r#"{"_id":"a","name":"Carol","dob":"1985-01-15T12:00:00.000Z","email":"c@example.com"}"#;
    let record: BirthdayRecord = serde_json::from_str(json).unwrap();

    assert_eq!(record.dob.year(), 1985);
    assert_eq!(record.dob.month(), 1);
}

#[test]
fn test_record_rejects_garbage_dob() {
    let json = r#"{"_id":"a","name":"Dan","dob":"yesterday","email":"d@example.com"}"#;
    let result: Result<BirthdayRecord, _> = serde_json::from_str(json);

    assert!(result.is_err(), "Unparsable dob should be a decode error");
}

#[test]
fn test_record_serialises_to_wire_shape() {
    let record = BirthdayRecord::new(
        "x1",
        "Eve",
        NaiveDate::from_ymd_opt(2001, 7, 9).unwrap(),
        "eve@example.com",
    );
    let value = serde_json::to_value(&record).unwrap();

    assert_eq!(value["_id"], "x1");
    assert_eq!(value["dob"], "2001-07-09");
}

#[test]
fn test_new_birthday_body() {
    let payload = NewBirthday {
        name: "Alice".to_string(),
        dob: "2000-01-05".to_string(),
        email: "alice@example.com".to_string(),
    };
    let value = serde_json::to_value(&payload).unwrap();

    assert_eq!(
        value,
        serde_json::json!({"name": "Alice", "dob": "2000-01-05", "email": "alice@example.com"})
    );
}

#[test]
fn test_parse_dob_variants() {
    let expected = NaiveDate::from_ymd_opt(2000, 1, 5).unwrap();

    assert_eq!(parse_dob("2000-01-05").unwrap(), expected);
    assert_eq!(parse_dob(" 2000-01-05 ").unwrap(), expected);
    assert_eq!(parse_dob("2000-01-05T00:00:00").unwrap(), expected);
    assert!(parse_dob("05/01/2000").is_err());
}

#[test]
fn test_parse_month_query() {
    assert_eq!(parse_month_query("1"), Some(Month::January));
    assert_eq!(parse_month_query("12"), Some(Month::December));
    assert_eq!(parse_month_query(""), None);
    assert_eq!(parse_month_query("0"), None);
    assert_eq!(parse_month_query("13"), None);
}

#[test]
fn test_form_clear() {
    let mut form = BirthdayForm {
        name: "a".to_string(),
        dob: "b".to_string(),
        email: "c".to_string(),
    };
    assert!(!form.is_empty());

    form.clear();
    assert!(form.is_empty());
}

#[test]
fn test_record_display() {
    let record = BirthdayRecord::new(
        "1",
        "Alice",
        NaiveDate::from_ymd_opt(2000, 1, 5).unwrap(),
        "alice@example.com",
    );
    assert_eq!(format!("{}", record), "Alice (2000-01-05)");
}
