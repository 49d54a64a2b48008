mod common;

use drug_insight::state::AppState;
use serde_json::json;

use common::Fixture;

#[test]
fn fixture_state_loads() {
    let fixture = Fixture::new();
    let state = fixture.state();
    assert_eq!(state.model.dimension(), 7);
    assert_eq!(state.reviews.len(), common::REVIEWS.len());
}

#[test]
fn missing_vectorizer_is_fatal() {
    let mut fixture = Fixture::new();
    fixture.settings.vectorizer_path = fixture.path("nope.json");
    let err = AppState::load(&fixture.settings).unwrap_err();
    assert!(format!("{err:#}").contains("nope.json"));
}

#[test]
fn corrupt_classifier_is_fatal() {
    let fixture = Fixture::new();
    std::fs::write(
        &fixture.settings.classifier_path,
        r#"{"classes": [0, 1], "coef":"#,
    )
    .unwrap();
    assert!(AppState::load(&fixture.settings).is_err());
}

#[test]
fn classifier_from_another_vocabulary_is_fatal() {
    let fixture = Fixture::new();
    let artifact = json!({ "classes": [0, 1], "coef": [1.0, -1.0], "intercept": 0.0 });
    std::fs::write(&fixture.settings.classifier_path, artifact.to_string()).unwrap();
    let err = AppState::load(&fixture.settings).unwrap_err();
    assert!(format!("{err:#}").contains("dimension mismatch"));
}

#[test]
fn dataset_without_rating_column_is_fatal() {
    let fixture = Fixture::new();
    std::fs::write(
        &fixture.settings.dataset_path,
        "drugName,condition\nTretinoin,Acne\n",
    )
    .unwrap();
    assert!(AppState::load(&fixture.settings).is_err());
}

#[test]
fn missing_dataset_is_fatal() {
    let mut fixture = Fixture::new();
    fixture.settings.dataset_path = fixture.path("missing.csv");
    assert!(AppState::load(&fixture.settings).is_err());
}
