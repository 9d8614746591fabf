//! Helpers for integration tests.

use std::path::Path;

use tempfile::TempDir;

/// Temporary artifact directory populated with a coherent set of model
/// files for all four apps.
pub struct ArtifactFixture {
    dir: TempDir,
}

impl ArtifactFixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create artifact directory.");

        write(
            dir.path(),
            "catalog.json",
            r#"[
                {"id": 101, "title": "Alpha"},
                {"id": 102, "title": "Beta"},
                {"id": 103, "title": "Gamma"},
                {"id": 104, "title": "Delta"}
            ]"#,
        );
        write(
            dir.path(),
            "similarity.json",
            r#"[
                [1.0, 0.82, 0.12, 0.45],
                [0.82, 1.0, 0.30, 0.45],
                [0.12, 0.30, 1.0, 0.20],
                [0.45, 0.45, 0.20, 1.0]
            ]"#,
        );

        write(
            dir.path(),
            "spam_vectorizer.json",
            r#"{
                "vocabulary": {"win": 0, "cash": 1, "free": 2, "lunch": 3, "meet": 4},
                "idf": [1.2, 1.3, 1.5, 1.1, 1.0],
                "stopwords": ["a", "the", "at", "i", "you"]
            }"#,
        );
        write(
            dir.path(),
            "spam_model.json",
            r#"{
                "class_log_prior": [-0.69, -0.69],
                "feature_log_prob": [
                    [-3.0, -3.0, -3.5, -0.5, -0.7],
                    [-0.5, -0.6, -0.8, -3.0, -3.2]
                ]
            }"#,
        );

        write(
            dir.path(),
            "heart_logistic_regression.json",
            r#"{
                "weights": [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 10.0, 0.0],
                "bias": -10.0
            }"#,
        );
        write(
            dir.path(),
            "heart_svm.json",
            r#"{
                "weights": [0.0, 0.0, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.5],
                "bias": -2.0
            }"#,
        );
        let stump = r#"{"nodes": [
            {"kind": "branch", "feature": 9, "threshold": 1.0, "left": 1, "right": 2},
            {"kind": "leaf", "class": 0},
            {"kind": "leaf", "class": 1}
        ]}"#;
        write(dir.path(), "heart_decision_tree.json", stump);
        write(
            dir.path(),
            "heart_random_forest.json",
            &format!(r#"{{"trees": [{stump}, {stump}, {stump}]}}"#),
        );

        write(
            dir.path(),
            "laptop_pipeline.json",
            r#"{
                "companies": ["Apple", "Dell", "HP"],
                "type_names": ["Ultrabook", "Notebook", "Gaming"],
                "cpu_brands": ["Intel Core i5", "Intel Core i7", "AMD Processor"],
                "gpu_brands": ["Intel", "Nvidia", "AMD"],
                "oses": ["Mac", "Windows", "Others/No OS/Linux"],
                "regressor": {
                    "weights": [
                        0.05, 0.0, -0.02,
                        0.1, 0.0, 0.15,
                        0.0, 0.08, -0.05,
                        0.0, 0.06, -0.04,
                        0.12, 0.0, -0.1,
                        0.02, -0.05, 0.03, 0.01, 0.001, 0.00005, 0.0002
                    ],
                    "intercept": 9.8
                }
            }"#,
        );
        write(
            dir.path(),
            "laptop_options.json",
            r#"{
                "companies": ["Apple", "Dell", "HP"],
                "type_names": ["Ultrabook", "Notebook", "Gaming"],
                "cpu_brands": ["Intel Core i5", "Intel Core i7", "AMD Processor"],
                "gpu_brands": ["Intel", "Nvidia", "AMD"],
                "oses": ["Mac", "Windows", "Others/No OS/Linux"],
                "ram_gb": [2, 4, 6, 8, 12, 16, 24, 32, 64],
                "hdd_gb": [0, 128, 256, 512, 1024, 2048],
                "ssd_gb": [0, 8, 128, 256, 512, 1024, 2048],
                "resolutions": ["1920x1080", "1366x768", "3840x2160"]
            }"#,
        );

        ArtifactFixture { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

fn write(dir: &Path, file: &str, contents: &str) {
    std::fs::write(dir.join(file), contents).expect("Failed to write artifact file.");
}
