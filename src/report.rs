//! Result reporters.
//!
//! Reporters turn structured [`SimulationReport`]s into text. The engine
//! never formats anything itself.

use std::fmt::Write as _;

use crate::error::SchedulingResult;
use crate::simulation::SimulationReport;

/// Renders simulation reports.
pub trait Reporter {
    /// Renders all reports as one document.
    fn render(&self, reports: &[SimulationReport]) -> SchedulingResult<String>;
}

/// Console report: one line per process plus averages.
///
/// With more than one report, a closing line names the algorithm with the
/// lowest mean waiting time.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextReporter {
    /// Append a compact timeline line (`[0-4]P1 [4-8]P2 ...`).
    pub show_timeline: bool,
}

impl TextReporter {
    /// Creates a reporter that also prints timelines.
    pub fn with_timeline() -> Self {
        Self {
            show_timeline: true,
        }
    }

    fn render_one(&self, out: &mut String, report: &SimulationReport) -> std::fmt::Result {
        match report.time_quantum {
            Some(q) => writeln!(out, "{} Scheduling (Time Quantum = {q}):", report.algorithm)?,
            None => writeln!(out, "{} Scheduling:", report.algorithm)?,
        }

        for p in &report.processes {
            writeln!(
                out,
                "Process ID: {} Arrival: {} Burst: {} Priority: {} Start: {} Finish: {} Waiting: {} Turnaround: {}",
                p.id,
                p.arrival_time,
                p.burst_time,
                p.priority,
                fmt_tick(p.start_time),
                fmt_tick(p.finish_time),
                p.waiting_time,
                p.turnaround_time,
            )?;
        }

        if self.show_timeline {
            let line = report
                .timeline
                .slices
                .iter()
                .map(|s| format!("[{}-{}]P{}", s.start, s.end, s.process_id))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(out, "Timeline: {line}")?;
        }

        let m = &report.metrics;
        writeln!(out, "Average Waiting Time: {:.2}", m.avg_waiting_time)?;
        writeln!(out, "Average Turnaround Time: {:.2}", m.avg_turnaround_time)?;
        writeln!(
            out,
            "Makespan: {} CPU Utilization: {:.1}% Context Switches: {}",
            m.makespan,
            m.cpu_utilization * 100.0,
            m.context_switches
        )
    }
}

fn fmt_tick(tick: Option<i64>) -> String {
    tick.map_or_else(|| "-".to_string(), |t| t.to_string())
}

impl Reporter for TextReporter {
    fn render(&self, reports: &[SimulationReport]) -> SchedulingResult<String> {
        let mut out = String::new();
        for (i, report) in reports.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            self.render_one(&mut out, report)?;
        }
        if reports.len() > 1 {
            if let Some(best) = SimulationReport::best_by_waiting(reports) {
                writeln!(out, "\nLowest average waiting time: {}", best.algorithm)?;
            }
        }
        Ok(out)
    }
}

/// Pretty-printed JSON array of reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn render(&self, reports: &[SimulationReport]) -> SchedulingResult<String> {
        Ok(serde_json::to_string_pretty(reports)?)
    }
}
