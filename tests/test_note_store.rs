use notekeeper::application::NoteStore;
use notekeeper::domain::{DisplayMode, DomainError, Note};
use notekeeper::util::testing::{sample_note, MockNoteService};

fn ids(notes: &[&Note]) -> Vec<i64> {
    notes.iter().map(|n| n.id).collect()
}

#[tokio::test]
async fn given_empty_collection_when_adding_note_then_visible_notes_hold_echoed_record() {
    // Arrange
    let mock = MockNoteService::builder().build();
    let mut store = NoteStore::new(mock);
    store.initialize().await.unwrap();
    store.update_draft("buy milk");

    // Act
    store.add_note_with_importance(false).await.unwrap();

    // Assert
    let visible = store.visible_notes();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, 1);
    assert_eq!(visible[0].content, "buy milk");
    assert!(!visible[0].important);
}

#[tokio::test]
async fn given_successful_adds_when_listing_all_then_holds_service_records_in_call_order() {
    // Arrange
    let mock = MockNoteService::builder()
        .with_note(sample_note(10, "seed", false))
        .build();
    let mut store = NoteStore::new(mock);
    store.initialize().await.unwrap();

    // Act
    for text in ["one", "two", "three"] {
        store.update_draft(text);
        store.add_note().await.unwrap();
    }

    // Assert
    let contents: Vec<&str> = store
        .visible_notes()
        .iter()
        .map(|n| n.content.as_str())
        .collect();
    assert_eq!(contents, vec!["seed", "one", "two", "three"]);
    assert_eq!(store.notes(), store.service().stored().as_slice());
    assert_eq!(store.service().create_calls(), 3);
}

#[tokio::test]
async fn given_mixed_importance_when_showing_important_only_then_returns_ordered_subsequence() {
    // Arrange
    let mock = MockNoteService::builder()
        .with_note(sample_note(1, "a", false))
        .with_note(sample_note(2, "b", true))
        .with_note(sample_note(3, "c", false))
        .with_note(sample_note(4, "d", true))
        .build();
    let mut store = NoteStore::new(mock);
    store.initialize().await.unwrap();

    // Act
    store.set_display_mode(DisplayMode::ImportantOnly);
    let important = ids(&store.visible_notes());
    store.set_display_mode(DisplayMode::All);
    let all = ids(&store.visible_notes());

    // Assert
    assert_eq!(important, vec![2, 4]);
    assert_eq!(all, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn given_two_notes_when_showing_important_only_then_returns_only_important_one() {
    // Arrange
    let mock = MockNoteService::builder()
        .with_note(sample_note(1, "a", false))
        .with_note(sample_note(2, "b", true))
        .build();
    let mut store = NoteStore::new(mock);
    store.initialize().await.unwrap();

    // Act
    store.set_display_mode(DisplayMode::ImportantOnly);

    // Assert
    let visible = store.visible_notes();
    assert_eq!(visible.len(), 1);
    assert_eq!(*visible[0], sample_note(2, "b", true));
}

#[tokio::test]
async fn given_note_when_toggling_twice_then_flag_returns_to_original() {
    // Arrange
    let mock = MockNoteService::builder()
        .with_note(sample_note(1, "HTML is easy", true))
        .build();
    let mut store = NoteStore::new(mock);
    store.initialize().await.unwrap();

    // Act
    let after_first = store.toggle_importance(1).await.unwrap().important;
    let after_second = store.toggle_importance(1).await.unwrap().important;

    // Assert
    assert!(!after_first);
    assert!(after_second);
    assert_eq!(store.service().update_calls(), 2);
}

#[tokio::test]
async fn given_rejected_create_when_adding_then_collection_and_draft_are_unchanged() {
    // Arrange
    let mock = MockNoteService::builder()
        .with_note(sample_note(1, "HTML is easy", true))
        .with_create_failure()
        .build();
    let mut store = NoteStore::new(mock);
    store.initialize().await.unwrap();
    let before = store.notes().to_vec();
    store.update_draft("will not land");

    // Act
    let result = store.add_note().await;

    // Assert
    assert!(matches!(result, Err(DomainError::CreateFailed(_))));
    assert_eq!(store.notes(), before.as_slice());
    assert_eq!(store.draft_content(), "will not land");
}

#[tokio::test]
async fn given_rejected_update_when_toggling_then_note_is_evicted() {
    // Arrange
    let mock = MockNoteService::builder()
        .with_note(sample_note(1, "a", false))
        .with_note(sample_note(2, "b", true))
        .with_note(sample_note(3, "c", false))
        .with_update_failure(2)
        .build();
    let mut store = NoteStore::new(mock);
    store.initialize().await.unwrap();

    // Act
    let result = store.toggle_importance(2).await;

    // Assert
    assert!(matches!(result, Err(DomainError::UpdateFailed { id: 2, .. })));
    assert!(store.notes().iter().all(|n| n.id != 2));
    assert_eq!(ids(&store.visible_notes()), vec![1, 3]);
}

#[tokio::test]
async fn given_empty_draft_when_adding_then_note_is_accepted() {
    // Arrange
    let mock = MockNoteService::builder().build();
    let mut store = NoteStore::new(mock);
    store.initialize().await.unwrap();

    // Act
    let added = store.add_note_with_importance(true).await.unwrap().clone();

    // Assert
    assert_eq!(added.content, "");
    assert!(added.important);
}
