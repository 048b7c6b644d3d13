//! Best-effort activity recording.

mod recorder;

pub use recorder::ActivityRecorder;
