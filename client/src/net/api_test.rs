use super::*;

#[test]
fn stuff_item_endpoint_formats_expected_path() {
    assert_eq!(stuff_item_endpoint("s123"), "/api/stuff/s123");
}

#[test]
fn failure_message_prefers_server_error() {
    let body = ErrorBody { error: "quantity must not be negative".to_owned() };
    assert_eq!(failure_message("add stuff", 400, Some(body)), "quantity must not be negative");
}

#[test]
fn failure_message_falls_back_to_status() {
    assert_eq!(failure_message("list stuff", 401, None), "list stuff failed: 401");
}

#[test]
fn failure_message_ignores_empty_server_error() {
    let body = ErrorBody { error: String::new() };
    assert_eq!(failure_message("sign in", 500, Some(body)), "sign in failed: 500");
}
