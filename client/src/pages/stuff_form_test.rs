use super::*;

#[test]
fn trims_name_and_parses_quantity() {
    let draft = validate_stuff_form("  Basket ", " 3 ", "excellent").unwrap();
    assert_eq!(draft, StuffDraft { name: "Basket".to_owned(), quantity: 3, condition: "excellent".to_owned() });
}

#[test]
fn blank_name_is_rejected() {
    assert_eq!(validate_stuff_form("   ", "1", "good"), Err("Name is required."));
}

#[test]
fn overlong_name_is_rejected() {
    let name = "x".repeat(MAX_NAME_LEN + 1);
    assert_eq!(validate_stuff_form(&name, "1", "good"), Err("Name is too long."));
}

#[test]
fn quantity_must_be_whole_and_non_negative() {
    assert_eq!(validate_stuff_form("Basket", "1.5", "good"), Err("Quantity must be a whole number."));
    assert_eq!(validate_stuff_form("Basket", "", "good"), Err("Quantity must be a whole number."));
    assert_eq!(validate_stuff_form("Basket", "-2", "good"), Err("Quantity must not be negative."));
    assert_eq!(validate_stuff_form("Basket", "0", "good").map(|d| d.quantity), Ok(0));
}

#[test]
fn unknown_condition_falls_back_to_default() {
    let draft = validate_stuff_form("Basket", "1", "mint").unwrap();
    assert_eq!(draft.condition, DEFAULT_CONDITION);
}

#[test]
fn empty_draft_uses_default_condition() {
    let draft = empty_draft();
    assert!(draft.name.is_empty());
    assert_eq!(draft.quantity, 0);
    assert_eq!(draft.condition, DEFAULT_CONDITION);
}
