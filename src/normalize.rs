//! Scalar transforms that put heterogeneous raw metrics on a shared 0-100
//! scale where higher always means better. None of these clamp their input:
//! out-of-range values scale through and the caller owns range validity.

/// Maps a 1-10 scale onto 0-100.
pub fn scale_up(v: f64) -> f64 {
    v * 10.0
}

/// Maps a 1-10 scale where 10 is worst onto 0-100 where 100 is best.
pub fn invert_scale(v: f64) -> f64 {
    (10.0 - v) * 10.0
}

/// Maps hours of sleep onto 0-100, treating 8 hours as a full score.
/// Capped at 100 on the high side; negative hours yield a negative score.
pub fn scale_sleep(hours: f64) -> f64 {
    (hours / 8.0 * 100.0).min(100.0)
}

/// Rounds to one decimal place. Applied once per score, after the weighted
/// sum, never on intermediate terms.
pub fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
