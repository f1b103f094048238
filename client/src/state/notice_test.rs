use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NoticeState::default();
    let a = state.push(NoticeLevel::Success, "Saved", "Home updated");
    let b = state.push(NoticeLevel::Error, "Save failed", "quota");
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].title, "Save failed");
}

#[test]
fn dismiss_removes_only_that_notice() {
    let mut state = NoticeState::default();
    let a = state.push(NoticeLevel::Info, "One", "");
    let b = state.push(NoticeLevel::Info, "Two", "");
    state.dismiss(a);
    assert_eq!(state.items.iter().map(|n| n.id).collect::<Vec<_>>(), [b]);
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn level_classes_are_distinct() {
    assert_ne!(NoticeLevel::Success.class(), NoticeLevel::Error.class());
    assert_ne!(NoticeLevel::Info.class(), NoticeLevel::Error.class());
}
