use serde::{Deserialize, Serialize};

/// Result of one workflow step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct WorkflowStepDto {
    pub step: String,
    /// Rows changed or notifications sent by the step.
    pub processed: u64,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct WorkflowRunDto {
    pub steps: Vec<WorkflowStepDto>,
}
