use super::*;

#[test]
fn credentials_serialize_with_both_fields() {
    let creds = Credentials { email: "magnus".to_owned(), password: "e4e5".to_owned() };
    let json = serde_json::to_value(&creds).unwrap();
    assert_eq!(json, serde_json::json!({ "email": "magnus", "password": "e4e5" }));
}

#[test]
fn credentials_accept_non_email_username() {
    let creds: Credentials = serde_json::from_str(r#"{"email":"not-an-email","password":""}"#).unwrap();
    assert_eq!(creds.email, "not-an-email");
    assert!(creds.password.is_empty());
}

#[test]
fn credentials_reject_missing_password() {
    let result = serde_json::from_str::<Credentials>(r#"{"email":"a@b.com"}"#);
    assert!(result.is_err());
}

#[test]
fn credentials_reject_non_string_field() {
    let result = serde_json::from_str::<Credentials>(r#"{"email":42,"password":"x"}"#);
    assert!(result.is_err());
}

#[test]
fn submission_result_parses_success_only() {
    let res: SubmissionResult = serde_json::from_str(r#"{"success":"Logged in"}"#).unwrap();
    assert_eq!(res, SubmissionResult::success("Logged in"));
}

#[test]
fn submission_result_parses_empty_object() {
    let res: SubmissionResult = serde_json::from_str("{}").unwrap();
    assert_eq!(res, SubmissionResult::default());
}

#[test]
fn submission_result_keeps_both_fields() {
    let res: SubmissionResult = serde_json::from_str(r#"{"success":"ok","error":"also bad"}"#).unwrap();
    assert_eq!(res.success.as_deref(), Some("ok"));
    assert_eq!(res.error.as_deref(), Some("also bad"));
}

#[test]
fn submission_result_skips_absent_fields_when_serialized() {
    let json = serde_json::to_string(&SubmissionResult::error("Invalid credentials")).unwrap();
    assert_eq!(json, r#"{"error":"Invalid credentials"}"#);
}
