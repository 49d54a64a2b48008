#![allow(dead_code)]

use std::path::{Path, PathBuf};

use drug_insight::{config::Settings, state::AppState};
use serde_json::json;
use tempfile::TempDir;

pub const HEADER: [&str; 7] = [
    "uniqueID",
    "drugName",
    "condition",
    "review",
    "rating",
    "date",
    "usefulCount",
];

/// `(drugName, condition, rating)`; an empty condition is written as a blank cell.
pub const REVIEWS: &[(&str, &str, &str)] = &[
    ("Tretinoin", "Acne", "9"),
    ("Doxycycline", "Acne", "8"),
    ("Benzoyl Peroxide", "Acne", "2"),
    ("Tretinoin", "acne", "10"),
    ("Spironolactone", "Acne", "7"),
    ("Minocycline", "Acne", "9"),
    ("Doxycycline", "Acne", "4"),
    ("Adapalene", "Acne", "10"),
    ("Isotretinoin", "Acne", "10"),
    ("Spironolactone", "ACNE", "8"),
    ("Doxycycline", "Acne", "9"),
    ("Tretinoin", "Acne", "7"),
    ("Tretinoin", "", "10"),
    ("Sertraline", "Depression", "9"),
    ("Bupropion", "Depression", "6"),
    ("Escitalopram", "depression", "7"),
    ("Sertraline", "Depression", "8"),
    ("Bupropion", "Major Depressive Disorder", "10"),
];

pub struct Fixture {
    pub dir: TempDir,
    pub settings: Settings,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let settings = Settings {
            vectorizer_path: dir.path().join("vectorizer.json"),
            classifier_path: dir.path().join("logistic_model.json"),
            dataset_path: dir.path().join("drugsComTrain_raw.csv"),
            ui_dir: None,
        };
        write_vectorizer(&settings.vectorizer_path);
        write_classifier(&settings.classifier_path);
        write_reviews(&settings.dataset_path, REVIEWS);
        Self { dir, settings }
    }

    pub fn state(&self) -> AppState {
        AppState::load(&self.settings).expect("fixture state loads")
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

pub fn write_vectorizer(path: &Path) {
    let artifact = json!({
        "vocabulary": {
            "wonderful": 0,
            "helped": 1,
            "great": 2,
            "terrible": 3,
            "worse": 4,
            "awful": 5,
            "lot": 6
        },
        "idf": [1.2, 1.1, 1.0, 1.2, 1.3, 1.4, 1.0],
        "sublinear_tf": true
    });
    std::fs::write(path, artifact.to_string()).expect("write vectorizer");
}

pub fn write_classifier(path: &Path) {
    let artifact = json!({
        "classes": [0, 1],
        "coef": [2.0, 1.5, 2.0, -2.0, -1.5, -2.0, 0.1],
        "intercept": -0.1
    });
    std::fs::write(path, artifact.to_string()).expect("write classifier");
}

pub fn write_reviews(path: &Path, rows: &[(&str, &str, &str)]) {
    let mut writer = csv::Writer::from_path(path).expect("open csv");
    writer.write_record(HEADER).expect("header");
    for (idx, &(drug, condition, rating)) in rows.iter().enumerate() {
        let id = (idx + 1).to_string();
        let review = format!("\"{drug}\" worked, mostly.\nWould try again");
        writer
            .write_record([
                id.as_str(),
                drug,
                condition,
                review.as_str(),
                rating,
                "May 20, 2012",
                "3",
            ])
            .expect("row");
    }
    writer.flush().expect("flush csv");
}
