//! Speech confidence: speaking rate in words per minute.

/// Scores delivery rate. Ideal pace is 120–160 WPM; returns 0 when nothing was
/// recorded (non-positive duration or no words).
pub fn compute_speech_score(duration_seconds: f64, word_count: usize) -> u32 {
    // `!(x > 0)` also rejects NaN
    if !(duration_seconds > 0.0) || word_count == 0 {
        return 0;
    }

    let wpm = word_count as f64 / duration_seconds * 60.0;

    if (120.0..=160.0).contains(&wpm) {
        100
    } else if (90.0..120.0).contains(&wpm) {
        85
    } else if wpm > 160.0 && wpm <= 190.0 {
        80 // too fast
    } else if wpm < 90.0 {
        60 // too slow
    } else {
        50
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_recording_scores_zero() {
        assert_eq!(compute_speech_score(0.0, 140), 0);
        assert_eq!(compute_speech_score(-3.0, 140), 0);
        assert_eq!(compute_speech_score(60.0, 0), 0);
        assert_eq!(compute_speech_score(f64::NAN, 10), 0);
    }

    #[test]
    fn test_ideal_pace_scores_100() {
        assert_eq!(compute_speech_score(60.0, 140), 100);
        assert_eq!(compute_speech_score(60.0, 120), 100);
        assert_eq!(compute_speech_score(60.0, 160), 100);
    }

    #[test]
    fn test_slightly_slow_scores_85() {
        assert_eq!(compute_speech_score(60.0, 90), 85);
        assert_eq!(compute_speech_score(60.0, 119), 85);
    }

    #[test]
    fn test_fast_scores_80() {
        assert_eq!(compute_speech_score(60.0, 161), 80);
        assert_eq!(compute_speech_score(60.0, 190), 80);
    }

    #[test]
    fn test_very_slow_scores_60() {
        assert_eq!(compute_speech_score(60.0, 89), 60);
        assert_eq!(compute_speech_score(120.0, 10), 60);
    }

    #[test]
    fn test_very_fast_scores_50() {
        assert_eq!(compute_speech_score(60.0, 191), 50);
        assert_eq!(compute_speech_score(10.0, 100), 50);
    }

    #[test]
    fn test_wpm_uses_fractional_seconds() {
        // 35 words in 15s = 140 WPM
        assert_eq!(compute_speech_score(15.0, 35), 100);
    }
}
