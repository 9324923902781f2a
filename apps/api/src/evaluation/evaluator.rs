//! Evaluator — turns a submitted interview session into a mock evaluation.
//!
//! There is no real analysis: each categorical field is drawn uniformly at
//! random from its fixed label set, and the summary is a fixed sentence
//! template with role and interview type substituted verbatim. The content
//! of `answers` never influences any output field.

use serde::{Deserialize, Serialize};

use crate::evaluation::sampler::LabelSampler;

/// Pitch quality labels.
pub const PITCH_LABELS: &[&str] = &["Steady", "Slightly high", "Calm tone"];

/// Confidence level labels.
pub const CONFIDENCE_LABELS: &[&str] = &["High", "Moderate", "Needs improvement"];

/// Nervousness level labels.
pub const NERVOUSNESS_LABELS: &[&str] = &["None", "Mild", "Noticeable"];

/// A submitted interview session. Every field is optional with a documented
/// default, applied during deserialization — absent fields never error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Submission {
    /// Role interviewed for, e.g. "Software Engineer". Default: empty.
    #[serde(default)]
    pub role: String,
    /// Interview type, e.g. "Technical". Default: empty.
    #[serde(default, rename = "type")]
    pub interview_type: String,
    /// Transcribed answers. Accepted but currently unused by the evaluator.
    #[serde(default)]
    pub answers: Vec<String>,
}

/// The mock evaluation returned to the client.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub pitch: &'static str,
    pub confidence: &'static str,
    pub nervousness: &'static str,
    pub summary: String,
}

/// Produces a mock evaluation for a submission.
///
/// Pure apart from the sampler: two calls with the same sampler state yield
/// the same evaluation regardless of `answers` content.
pub fn evaluate(submission: &Submission, sampler: &dyn LabelSampler) -> Evaluation {
    let summary = format!(
        "You did well in your {} interview ({}). \
         Focus on clarity and consistent tone. Overall performance is promising!",
        submission.role, submission.interview_type
    );

    Evaluation {
        pitch: sampler.pick(PITCH_LABELS),
        confidence: sampler.pick(CONFIDENCE_LABELS),
        nervousness: sampler.pick(NERVOUSNESS_LABELS),
        summary,
    }
}
