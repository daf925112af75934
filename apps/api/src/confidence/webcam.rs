//! Webcam confidence: banded score over an externally supplied instability metric.
//!
//! 0 means a frozen frame, higher means more motion. Natural head movement (5–25)
//! scores best; a perfectly still feed reads as tense, heavy motion as fidgeting.

pub fn compute_webcam_score(instability: f64) -> u32 {
    if instability < 5.0 {
        80
    } else if instability <= 25.0 {
        95
    } else if instability <= 50.0 {
        70
    } else {
        50
    }
}
