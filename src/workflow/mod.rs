pub mod submission_ctx;
pub mod submission_flow;
pub mod submission_plan;

pub use submission_ctx::SubmissionCtx;
pub use submission_flow::{FailedSubmission, SubmissionFlow, SubmissionOutcome, SubmissionRecord};
pub use submission_plan::SubmissionPlan;
