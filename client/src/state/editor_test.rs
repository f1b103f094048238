use super::*;

#[test]
fn refusal_titles_follow_the_error_kind() {
    assert_eq!(refusal_title(&EditError::BelowMinimum { field: "features", min: 1 }), "Cannot remove item");
    assert_eq!(refusal_title(&EditError::IndexOutOfRange { index: 4, len: 2 }), "Item no longer exists");
    assert_eq!(refusal_title(&EditError::NotFound { id: "7".to_owned() }), "Item not found");
}
