use chrono::NaiveDate;
use sitedata_core::{
    run_member_session, run_news_session, Console, DocumentRepository, MemberDocument,
    MemberService, NewsDocument, NewsService, SessionOutcome, YamlFileRepository,
};
use std::io::Cursor;
use std::path::Path;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()
}

fn run_news(path: &Path, script: &str) -> (SessionOutcome, String) {
    let mut service = NewsService::open(YamlFileRepository::<NewsDocument>::new(path)).unwrap();
    let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
    let outcome = run_news_session(&mut console, &mut service, today()).unwrap();
    let (_, output) = console.into_parts();
    (outcome, String::from_utf8(output).unwrap())
}

fn run_members(path: &Path, script: &str) -> (SessionOutcome, String) {
    let mut service =
        MemberService::open(YamlFileRepository::<MemberDocument>::new(path)).unwrap();
    let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
    let outcome = run_member_session(&mut console, &mut service).unwrap();
    let (_, output) = console.into_parts();
    (outcome, String::from_utf8(output).unwrap())
}

#[test]
fn news_session_adds_category_and_item_then_saves() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("news.yml");
    let script = concat!(
        "5\naward\nAwards\nfa-trophy\n#ffc107\n",
        "1\nsoon\ntoday\nBest paper\nOur paper won.\n9\nx\n1\n\ny\n",
        "4\n",
        "7\n",
    );

    let (outcome, output) = run_news(&path, script);
    assert_eq!(outcome, SessionOutcome::Saved);
    assert!(output.contains("Please enter a valid date in YYYY-MM-DD format or 'today'"));
    assert!(output.contains("Invalid selection."));
    assert!(output.contains("Please enter a number."));
    assert!(output.contains("✅ Added news item: Best paper"));
    assert!(output.contains("1. 2025-01-02 - Best paper ⭐"));
    assert!(output.contains("   Category: Awards"));
    assert!(output.contains("✅ Data saved successfully!"));

    let saved = YamlFileRepository::<NewsDocument>::new(&path).load().unwrap();
    assert_eq!(saved.categories.len(), 1);
    let item = &saved.items[0];
    assert_eq!(item.date, "2025-01-02");
    assert_eq!(item.category, "award");
    assert_eq!(item.link, None);
    assert!(item.featured);
}

#[test]
fn news_menu_rejects_bad_choices_and_exits_without_saving() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("news.yml");

    let (outcome, output) = run_news(&path, "abc\n42\n5\nx\nX\nfa-x\n#000\n0\n");
    assert_eq!(outcome, SessionOutcome::Discarded);
    assert!(output.contains("Invalid input. Please enter a number."));
    assert!(output.contains("Invalid choice. Please select 0-7."));
    assert!(output.contains("Exiting without saving changes."));
    assert!(!path.exists());
}

#[test]
fn news_print_shows_the_document_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("news.yml");

    let (_, output) = run_news(&path, "5\ntalk\nTalks\nfa-microphone\n#17a2b8\n6\n0\n");
    assert!(output.contains("=== Current Data ==="));
    assert!(output.contains("display_name: Talks"));
    assert!(!path.exists());
}

#[test]
fn end_of_input_mid_operation_is_an_unsaved_exit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("news.yml");
    let repo = YamlFileRepository::<NewsDocument>::new(&path);
    let mut seeded = NewsDocument::default();
    seeded
        .categories
        .push(sitedata_core::Category::new("talk", "Talks", "fa-microphone", "#17a2b8"));
    repo.save(&seeded).unwrap();
    let before = std::fs::read_to_string(&path).unwrap();

    let (outcome, output) = run_news(&path, "1\n2025-02-02\nUnfinished\n");
    assert_eq!(outcome, SessionOutcome::Interrupted);
    assert!(output.ends_with("Exiting...\n"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn news_edit_with_invalid_index_abandons_without_retry() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("news.yml");
    let script = concat!(
        "5\ntalk\nTalks\nfa-microphone\n#17a2b8\n",
        "1\n2024-03-03\nTalk\nGave a talk.\n1\nhttps://example.org\nn\n",
        "2\n4\n",
        "2\n1\n\n\n\n\n\n",
        "7\n",
    );

    let (outcome, output) = run_news(&path, script);
    assert_eq!(outcome, SessionOutcome::Saved);
    assert!(output.contains("Invalid selection."));
    assert!(output.contains("Link (https://example.org): "));
    assert!(output.contains("✅ Updated: Talk"));

    let saved = YamlFileRepository::<NewsDocument>::new(&path).load().unwrap();
    assert_eq!(saved.items[0].title, "Talk");
    assert_eq!(saved.items[0].link, None);
}

#[test]
fn member_session_adds_then_moves_to_alumni() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("group_members.yml");
    let script = concat!(
        "1\nAda\nResearcher\n\nStudies stars.\nada@example.org\n\n\n\n\n",
        "7\n1\n1\nProfessor at X\n",
        "9\n",
    );

    let (outcome, output) = run_members(&path, script);
    assert_eq!(outcome, SessionOutcome::Saved);
    assert!(output.contains("✅ Added Ada to current section!"));
    assert!(output.contains("✅ Moved Ada to alumni!"));

    let saved = YamlFileRepository::<MemberDocument>::new(&path)
        .load()
        .unwrap();
    assert!(saved.current.is_empty());
    let alumnus = &saved.alumni[0];
    assert_eq!(alumnus.role, "Former Researcher");
    assert_eq!(alumnus.current_position.as_deref(), Some("Professor at X"));
    assert_eq!(alumnus.image, None);
}

#[test]
fn member_session_reports_bad_selection_and_keeps_looping() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("group_members.yml");
    let script = concat!(
        "2\nGrace\nFormer Postdoc\ngrace.png\nWorked on lensing.\ng@example.org\n\n\n\n\nProfessor at Y\n",
        "4\n7\n",
        "6\none\n",
        "10\n",
        "0\n",
    );

    let (outcome, output) = run_members(&path, script);
    assert_eq!(outcome, SessionOutcome::Discarded);
    assert!(output.contains("1. Grace - Former Postdoc"));
    assert!(output.contains("Invalid selection."));
    assert!(output.contains("Invalid input."));
    assert!(output.contains("Invalid choice. Please select 0-9."));
    assert!(!path.exists());
}
