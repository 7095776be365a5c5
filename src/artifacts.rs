//! Artifact loading and inference for `machine-condition`.
//!
//! The fitted scaler and SVM classifier are exported by the training
//! environment as JSON files and treated as immutable here. Both are
//! deserialized once at startup from `main.rs`; a missing or corrupt file is
//! fatal before the server binds (no degraded mode, no fallback model).

use std::fs;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::models::{SensorReadings, Verdict};

// ---

/// Fitted feature scaler: per-feature `(x - mean) / scale` with statistics
/// captured at training time.
#[derive(Debug, Deserialize)]
pub struct StandardScaler {
    // ---
    /// Column names the scaler was fitted on, in order. Carried for human
    /// inspection of the artifact; not checked at runtime.
    #[allow(dead_code)]
    pub feature_names: Vec<String>,
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Rescale a feature vector using the fitted statistics.
    ///
    /// Errors if the vector length does not match the fitted feature count
    /// (artifact retrained with a different feature set).
    pub fn transform(&self, features: &[f64]) -> Result<Vec<f64>> {
        // ---
        if features.len() != self.mean.len() || self.mean.len() != self.scale.len() {
            bail!(
                "feature count mismatch: scaler fitted on {} features, got {}",
                self.mean.len(),
                features.len()
            );
        }

        Ok(features
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(x, (mean, scale))| (x - mean) / scale)
            .collect())
    }
}

/// Fitted binary SVM classifier with an RBF kernel.
///
/// Decision function over the scaled feature vector `x`:
/// `sum_i dual_coef[i] * exp(-gamma * ||sv_i - x||^2) + intercept`,
/// label 1 iff the decision value is positive.
#[derive(Debug, Deserialize)]
pub struct SvmClassifier {
    // ---
    pub kernel: String,
    pub gamma: f64,
    pub intercept: f64,
    pub dual_coef: Vec<f64>,
    pub support_vectors: Vec<Vec<f64>>,
}

impl SvmClassifier {
    /// Classify a scaled feature vector into label 0 or 1.
    ///
    /// Errors if the vector length does not match the support vector
    /// dimensionality.
    pub fn predict(&self, scaled: &[f64]) -> Result<u8> {
        // ---
        let mut decision = self.intercept;
        for (sv, coef) in self.support_vectors.iter().zip(self.dual_coef.iter()) {
            if sv.len() != scaled.len() {
                bail!(
                    "feature count mismatch: classifier fitted on {} features, got {}",
                    sv.len(),
                    scaled.len()
                );
            }
            let sq_dist: f64 = sv
                .iter()
                .zip(scaled.iter())
                .map(|(a, b)| (a - b) * (a - b))
                .sum();
            decision += coef * (-self.gamma * sq_dist).exp();
        }

        Ok(u8::from(decision > 0.0))
    }
}

/// The immutable artifact pair, loaded once per process and shared read-only
/// by every request handler.
#[derive(Debug)]
pub struct Artifacts {
    // ---
    pub scaler: StandardScaler,
    pub classifier: SvmClassifier,
}

impl Artifacts {
    /// Deserialize the scaler and classifier from their configured paths.
    ///
    /// Called once from `main.rs` before the router is built; any failure
    /// here aborts startup.
    pub fn load(scaler_path: &str, model_path: &str) -> Result<Artifacts> {
        // ---
        let scaler: StandardScaler = read_artifact(scaler_path)
            .with_context(|| format!("failed to load scaler artifact from '{}'", scaler_path))?;

        let classifier: SvmClassifier = read_artifact(model_path)
            .with_context(|| format!("failed to load classifier artifact from '{}'", model_path))?;

        tracing::info!(
            "Artifacts loaded: {} kernel, {} support vectors, {} features",
            classifier.kernel,
            classifier.support_vectors.len(),
            scaler.mean.len()
        );

        Ok(Artifacts { scaler, classifier })
    }

    /// Run one inference cycle: transform the record's feature vector, then
    /// predict, then map the binary label to a verdict.
    pub fn classify(&self, readings: &SensorReadings) -> Result<Verdict> {
        // ---
        let scaled = self.scaler.transform(&readings.to_features())?;
        let label = self.classifier.predict(&scaled)?;

        Ok(Verdict::from_label(label))
    }
}

fn read_artifact<T: for<'de> Deserialize<'de>>(path: &str) -> Result<T> {
    // ---
    let bytes = fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::models::RawSensorInput;

    /// Scaler whose means are the control defaults, so the default record
    /// maps to the origin of the scaled space.
    fn fixture_scaler() -> StandardScaler {
        // ---
        StandardScaler {
            feature_names: vec![
                "Air temperature [K]".into(),
                "Process temperature [K]".into(),
                "Rotational speed [rpm]".into(),
                "Torque [Nm]".into(),
                "Tool wear [min]".into(),
            ],
            mean: vec![300.0, 310.0, 1500.0, 40.0, 50.0],
            scale: vec![2.0, 1.5, 180.0, 10.0, 60.0],
        }
    }

    /// Two support vectors: one on the origin (normal), one at high torque
    /// and tool wear (failure). Decision values are hand-computable.
    fn fixture_classifier() -> SvmClassifier {
        // ---
        SvmClassifier {
            kernel: "rbf".to_string(),
            gamma: 0.1,
            intercept: -0.05,
            dual_coef: vec![-1.0, 1.0],
            support_vectors: vec![
                vec![0.0, 0.0, 0.0, 0.0, 0.0],
                vec![0.0, 0.0, 0.0, 6.0, 4.0],
            ],
        }
    }

    fn fixture_artifacts() -> Artifacts {
        // ---
        Artifacts {
            scaler: fixture_scaler(),
            classifier: fixture_classifier(),
        }
    }

    #[test]
    fn test_transform_applies_fitted_statistics() {
        // ---
        let scaled = fixture_scaler()
            .transform(&[304.0, 313.0, 1680.0, 50.0, 110.0])
            .unwrap();

        assert_eq!(scaled, vec![2.0, 2.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_transform_rejects_wrong_feature_count() {
        // ---
        let err = fixture_scaler().transform(&[300.0, 310.0]).unwrap_err();

        assert!(err.to_string().contains("feature count mismatch"));
    }

    #[test]
    fn test_predict_normal_at_origin() {
        // ---
        // decision = -1*1 + 1*exp(-0.1*52) - 0.05 ≈ -1.044
        let label = fixture_classifier()
            .predict(&[0.0, 0.0, 0.0, 0.0, 0.0])
            .unwrap();

        assert_eq!(label, 0);
    }

    #[test]
    fn test_predict_failure_near_failure_vector() {
        // ---
        // decision = -exp(-0.1*52) + 1*1 - 0.05 ≈ +0.944
        let label = fixture_classifier()
            .predict(&[0.0, 0.0, 0.0, 6.0, 4.0])
            .unwrap();

        assert_eq!(label, 1);
    }

    #[test]
    fn test_predict_rejects_wrong_feature_count() {
        // ---
        let err = fixture_classifier().predict(&[0.0, 0.0, 0.0]).unwrap_err();

        assert!(err.to_string().contains("feature count mismatch"));
    }

    #[test]
    fn test_classify_defaults_is_normal_and_deterministic() {
        // ---
        let artifacts = fixture_artifacts();
        let readings = SensorReadings::defaults();

        let first = artifacts.classify(&readings).unwrap();
        let second = artifacts.classify(&readings).unwrap();

        assert_eq!(first, Verdict::Normal);
        assert_eq!(first, second);
    }

    #[test]
    fn test_classify_high_torque_and_wear_is_failure() {
        // ---
        // Raw units for the failure support vector: torque 40 + 6*10,
        // tool wear 50 + 4*60.
        let readings = RawSensorInput {
            air_temperature: 300.0,
            process_temperature: 310.0,
            rotational_speed: 1500,
            torque: 100.0,
            tool_wear: 290,
        }
        .to_clamped();

        let verdict = fixture_artifacts().classify(&readings).unwrap();

        assert_eq!(verdict, Verdict::FailureLikely);
    }

    #[test]
    fn test_load_missing_artifact_fails() {
        // ---
        let err = Artifacts::load("does/not/exist/scaler.json", "does/not/exist/model.json")
            .unwrap_err();

        assert!(err.to_string().contains("failed to load scaler artifact"));
    }

    #[test]
    fn test_load_corrupt_artifact_fails() {
        // ---
        let dir = std::env::temp_dir();
        let scaler_path = dir.join(format!("mc-corrupt-scaler-{}.json", std::process::id()));
        let model_path = dir.join(format!("mc-corrupt-model-{}.json", std::process::id()));
        std::fs::write(&scaler_path, "{ not valid json").unwrap();
        std::fs::write(&model_path, "{ not valid json").unwrap();

        let err = Artifacts::load(
            scaler_path.to_str().unwrap(),
            model_path.to_str().unwrap(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("failed to load scaler artifact"));

        std::fs::remove_file(&scaler_path).ok();
        std::fs::remove_file(&model_path).ok();
    }

    #[test]
    fn test_load_shipped_artifacts() {
        // ---
        let artifacts =
            Artifacts::load("artifacts/scaler.json", "artifacts/svm_model.json").unwrap();

        assert_eq!(artifacts.classifier.kernel, "rbf");
        assert_eq!(artifacts.scaler.mean.len(), 5);
        assert_eq!(
            artifacts.classifier.support_vectors.len(),
            artifacts.classifier.dual_coef.len()
        );

        // Shipped model calls the declared default readings normal.
        let verdict = artifacts.classify(&SensorReadings::defaults()).unwrap();
        assert_eq!(verdict, Verdict::Normal);
    }
}
