use std::time::{Duration, Instant};

use crate::{
    convert::Converter,
    model::{Order, RenderSpec, TargetType},
};

/// Outcome of one dispatched job.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JobOutcome {
    Completed,
    /// The spec's type names no known pipeline; nothing was invoked.
    InvalidTarget { message: String },
    /// The converter was invoked and failed.
    Failed { message: String },
}

#[derive(Clone, Debug)]
pub struct JobReport {
    pub position: usize, // 1-based
    pub total: usize,
    pub path: String,
    pub outcome: JobOutcome,
}

/// What actually happened during a run: one entry per job, in input order,
/// plus the order-level wall-clock time.
#[derive(Clone, Debug)]
pub struct RunReport {
    pub jobs: Vec<JobReport>,
    pub elapsed: Duration,
}

impl RunReport {
    pub fn completed(&self) -> usize {
        self.jobs
            .iter()
            .filter(|j| j.outcome == JobOutcome::Completed)
            .count()
    }
}

pub fn progress_line(position: usize, total: usize, path: &str) -> String {
    format!("Processing order part {position}/{total}: {path}")
}

/// Executes the order strictly in sequence.
///
/// Every job is attempted regardless of earlier outcomes; one failing job
/// never aborts the remainder. The order-level timer wraps all jobs and the
/// per-job timers inside [`dispatch`] nest under it.
pub fn run(order: &Order, converter: &dyn Converter) -> RunReport {
    let total = order.len();
    println!("\nStarted order clocking...");
    let started = Instant::now();

    let mut jobs = Vec::with_capacity(total);
    for (i, spec) in order.iter().enumerate() {
        let position = i + 1;
        println!("\n{}", progress_line(position, total, &spec.path));
        let outcome = dispatch(spec, converter);
        jobs.push(JobReport {
            position,
            total,
            path: spec.path.clone(),
            outcome,
        });
    }

    let elapsed = started.elapsed();
    if total == 1 {
        println!("\nConversion completed in {elapsed:.2?}");
    } else {
        println!("\nOrder completed in {elapsed:.2?}");
    }
    RunReport { jobs, elapsed }
}

/// Routes one spec to the converter pipeline its type names.
///
/// Individually timed so it is also usable for a single ad hoc job outside
/// any order. An unrecognized type is reported and invokes no pipeline;
/// converter failures are reported and contained. Both are job-local.
pub fn dispatch(spec: &RenderSpec, converter: &dyn Converter) -> JobOutcome {
    println!("\nStarted clocking...");
    let started = Instant::now();

    let outcome = match &spec.target_type {
        TargetType::Image => match converter.render_image(spec) {
            Ok(()) => JobOutcome::Completed,
            Err(e) => JobOutcome::Failed {
                message: e.to_string(),
            },
        },
        TargetType::Video => match converter.render_video(spec) {
            Ok(()) => JobOutcome::Completed,
            Err(e) => JobOutcome::Failed {
                message: e.to_string(),
            },
        },
        TargetType::Other(t) => JobOutcome::InvalidTarget {
            message: format!("{t} is not a valid conversion target type."),
        },
    };

    match &outcome {
        JobOutcome::Completed => {}
        JobOutcome::InvalidTarget { message } | JobOutcome::Failed { message } => {
            println!("{message}");
        }
    }

    let elapsed = started.elapsed();
    println!("Clocked at {elapsed:.2?}");
    tracing::debug!(path = %spec.path, ?elapsed, ?outcome, "dispatch finished");
    outcome
}
