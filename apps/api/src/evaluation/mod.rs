// Evaluation engine: submission model, label sampling, evaluator, handlers.
// All randomness goes through the LabelSampler trait — no direct RNG calls
// in handler or evaluator code.

pub mod evaluator;
pub mod handlers;
pub mod sampler;
