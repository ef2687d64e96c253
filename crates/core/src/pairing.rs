/// Walks reference indices `0, reference_step, ..` and predicted indices
/// `0, predicted_step, ..` in lockstep; the shorter walk bounds the output.
///
/// Both steps must be non-zero; [`crate::EvaluatorConfig::validate`] enforces
/// this before evaluation.
pub fn pair_indices(
    reference_len: usize,
    predicted_len: usize,
    reference_step: usize,
    predicted_step: usize,
) -> impl Iterator<Item = (usize, usize)> {
    (0..reference_len)
        .step_by(reference_step)
        .zip((0..predicted_len).step_by(predicted_step))
}

/// Number of pairs [`pair_indices`] yields.
pub fn pair_count(
    reference_len: usize,
    predicted_len: usize,
    reference_step: usize,
    predicted_step: usize,
) -> usize {
    reference_len
        .div_ceil(reference_step)
        .min(predicted_len.div_ceil(predicted_step))
}
