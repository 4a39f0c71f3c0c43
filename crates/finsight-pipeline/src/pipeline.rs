//! Sequential pipeline over stages

use crate::error::{PipelineError, Result};
use crate::runner::StageRunner;
use crate::stage::{StageRequest, TaskResult};
use tracing::info;

/// Progress callback fired once per completed stage
pub type ProgressFn<'a> = dyn Fn(&TaskResult) + Send + Sync + 'a;

/// A pipeline of stages run strictly in sequence
///
/// Each stage's raw output becomes the next stage's context. There is no
/// branching, no retry, and no parallelism; the final stage's result is the
/// user-visible artifact.
pub struct Pipeline {
    runner: StageRunner,
    stages: Vec<StageRequest>,
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stages)
            .finish_non_exhaustive()
    }
}

impl Pipeline {
    /// Create a new pipeline builder
    pub fn builder(runner: StageRunner) -> PipelineBuilder {
        PipelineBuilder::new(runner)
    }

    /// Run all stages, firing `on_progress` after each one
    pub async fn run(&self, on_progress: &ProgressFn<'_>) -> Result<TaskResult> {
        let mut previous: Option<TaskResult> = None;

        for stage in &self.stages {
            let mut stage = stage.clone();
            if stage.context.is_none() {
                stage.context = previous.as_ref().map(|r| r.raw.clone());
            }

            info!("Running stage '{}'", stage.role);
            let result = self.runner.invoke(stage).await?;
            on_progress(&result);
            previous = Some(result);
        }

        previous.ok_or(PipelineError::NoStages)
    }

    /// Get the underlying runner
    pub fn runner(&self) -> &StageRunner {
        &self.runner
    }
}

/// Builder for [`Pipeline`]
pub struct PipelineBuilder {
    runner: StageRunner,
    stages: Vec<StageRequest>,
}

impl PipelineBuilder {
    /// Create a new builder
    pub fn new(runner: StageRunner) -> Self {
        Self {
            runner,
            stages: Vec::new(),
        }
    }

    /// Append a stage
    pub fn add_stage(mut self, stage: StageRequest) -> Self {
        self.stages.push(stage);
        self
    }

    /// Build the pipeline
    pub fn build(self) -> Result<Pipeline> {
        if self.stages.is_empty() {
            return Err(PipelineError::NoStages);
        }

        Ok(Pipeline {
            runner: self.runner,
            stages: self.stages,
        })
    }
}
