//! Boundary contract for the opaque fundus image classifier.
//!
//! The model itself (loading, preprocessing, inference) lives entirely
//! outside this workspace; the service only consumes its output and
//! persists the resulting label.

use fundus_core::DiagnosisLabel;

use crate::error::ServiceError;

/// Output of a classification run.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// The predicted class label.
    pub label: DiagnosisLabel,
    /// Per-class confidence scores, index 0 = glaucoma, index 1 = not
    /// glaucoma. Not persisted on the patient record.
    pub confidence: Vec<f32>,
}

impl Classification {
    /// Confidence of the predicted label as a percentage, if the vector
    /// carries a score for it.
    #[must_use]
    pub fn confidence_pct(&self) -> Option<f32> {
        let index = match self.label {
            DiagnosisLabel::Glaucoma => 0,
            DiagnosisLabel::NotGlaucoma => 1,
        };
        self.confidence.get(index).map(|score| score * 100.0)
    }

    /// Human-readable one-liner a caller can fold into the record notes.
    #[must_use]
    pub fn summary(&self) -> String {
        match self.confidence_pct() {
            Some(pct) => format!("{} ({pct:.2}% confidence)", self.label),
            None => self.label.to_string(),
        }
    }
}

/// The consumed classification collaborator.
///
/// Implementations wrap whatever model runtime the deployment uses; the
/// service treats `classify` as an opaque function from image bytes to a
/// label plus confidence vector.
pub trait FundusClassifier: Send + Sync {
    /// Classify a fundus image.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Classifier` when the model cannot produce a
    /// result for the given input.
    fn classify(&self, image: &[u8]) -> Result<Classification, ServiceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_pct_indexes_by_label() {
        let positive = Classification {
            label: DiagnosisLabel::Glaucoma,
            confidence: vec![0.91, 0.09],
        };
        assert_eq!(positive.confidence_pct(), Some(91.0));

        let negative = Classification {
            label: DiagnosisLabel::NotGlaucoma,
            confidence: vec![0.2, 0.8],
        };
        assert_eq!(negative.confidence_pct(), Some(80.0));
    }

    #[test]
    fn test_summary_with_and_without_scores() {
        let with = Classification {
            label: DiagnosisLabel::Glaucoma,
            confidence: vec![0.5, 0.5],
        };
        assert_eq!(with.summary(), "Glaucoma (50.00% confidence)");

        let without = Classification {
            label: DiagnosisLabel::NotGlaucoma,
            confidence: Vec::new(),
        };
        assert_eq!(without.summary(), "Not Glaucoma");
    }
}
