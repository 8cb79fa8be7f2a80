use crate::{NewTutorial, Tutorial};

#[test]
fn test_new_tutorial_trims_title() {
    let tutorial = NewTutorial::new("  Reading candlesticks ", "Body").unwrap();
    assert_eq!(tutorial.title, "Reading candlesticks");
}

#[test]
fn test_new_tutorial_requires_title_and_content() {
    assert!(NewTutorial::new("", "Body").is_err());
    assert!(NewTutorial::new("Title", "   ").is_err());
}

#[test]
fn test_tutorial_deserializes_without_id() {
    let tutorial: Tutorial =
        serde_json::from_str(r#"{"title":"Orders 101","content":"Market vs limit"}"#).unwrap();
    assert_eq!(tutorial.id, None);
    assert_eq!(tutorial.title, "Orders 101");
}

#[test]
fn test_tutorial_list_tolerates_null_text_fields() {
    let raw = serde_json::json!([
        { "id": 1, "title": "Orders 101", "content": null },
        { "id": 2, "title": null, "content": "Body" },
        { "id": 3, "title": "Stops" }
    ]);

    let tutorials: Vec<Tutorial> = serde_json::from_value(raw).unwrap();

    assert_eq!(tutorials.len(), 3);
    assert_eq!(tutorials[0].content, "");
    assert_eq!(tutorials[1].title, "");
    assert_eq!(tutorials[2].content, "");
}
