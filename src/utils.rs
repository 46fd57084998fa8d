use crate::payloads::StepDetailPayload;
use std::time::Instant;

// Records a finished per-file step for the log and the frontend.
pub fn file_step_detail(file_id: &str, step_name: &str, duration_ms: u128) -> StepDetailPayload {
    step_detail(format!("File {} - {}", file_id, step_name), duration_ms)
}

pub fn step_detail(step: String, duration_ms: u128) -> StepDetailPayload {
    log::debug!("{} took {}ms", step, duration_ms);
    StepDetailPayload { step, duration_ms }
}

/// Runs `f` and returns its result with the elapsed milliseconds.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, u128) {
    let now = Instant::now();
    let result = f();
    (result, now.elapsed().as_millis())
}
