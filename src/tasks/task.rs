use crate::evaluation::AccuracyReport;
use crate::tasks::TaskError;
use std::fmt::{Display, Formatter, Result};

pub trait Task {
    fn run(&mut self) -> std::result::Result<TaskOutcome, TaskError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum TaskOutcome {
    Evaluated {
        report: AccuracyReport,
        samples: usize,
        depth: usize,
        leaves: usize,
    },
    Classified {
        label: String,
    },
}

impl Display for TaskOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            TaskOutcome::Evaluated {
                report,
                samples,
                depth,
                leaves,
            } => {
                writeln!(f, "tree: depth={depth}, leaves={leaves}")?;
                writeln!(f, "evaluated on {samples} samples")?;
                write!(f, "{report}")
            }
            TaskOutcome::Classified { label } => writeln!(f, "{label}"),
        }
    }
}
