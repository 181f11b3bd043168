/// World units of progress per score point.
pub const SCORE_DISTANCE_DIVISOR: f32 = 10.0;

/// Score from horizontal progress: one point per 10 world units, floored.
///
/// Score is a pure function of progress, so a level reload that restores the
/// spawn position also restores the spawn score.
pub fn distance_score(display_x: f32) -> u32 {
    (display_x / SCORE_DISTANCE_DIVISOR).floor() as u32
}
