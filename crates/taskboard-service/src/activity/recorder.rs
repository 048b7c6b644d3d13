//! Activity recorder used by the mutating services.

use std::sync::Arc;

use tracing::warn;

use taskboard_database::repositories::activity::ActivityRepository;
use taskboard_entity::activity::NewActivity;

use crate::context::RequestContext;

/// Appends activity log entries for mutations.
///
/// Recording is best effort: a failed insert is logged and swallowed so
/// the mutation it describes still succeeds.
#[derive(Debug, Clone)]
pub struct ActivityRecorder {
    repo: Arc<ActivityRepository>,
}

impl ActivityRecorder {
    /// Creates a new activity recorder.
    pub fn new(repo: Arc<ActivityRepository>) -> Self {
        Self { repo }
    }

    /// Record one entry for the acting user.
    pub async fn record(&self, ctx: &RequestContext, activity: NewActivity) {
        if let Err(e) = self.repo.record(ctx.user_id(), &activity).await {
            warn!(
                user_id = %ctx.user_id(),
                action = %activity.action,
                error = %e,
                "Failed to record activity"
            );
        }
    }
}
