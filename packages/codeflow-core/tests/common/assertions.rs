//! Custom assertions

use codeflow_core::features::execution::{ExecutionStep, LineStatus};
use codeflow_core::Debugger;

/// Steps are non-decreasing by line and every line is 1-based
pub fn assert_steps_sorted(steps: &[ExecutionStep]) {
    assert!(steps.iter().all(|s| s.line >= 1), "step with line 0");
    assert!(
        steps.windows(2).all(|w| w[0].line <= w[1].line),
        "steps not sorted by line"
    );
}

/// Cursor lies on a step, or there are no steps
pub fn assert_cursor_in_bounds(debugger: &Debugger) {
    let len = debugger.steps().len();
    if len == 0 {
        assert_eq!(debugger.cursor(), 0);
    } else {
        assert!(debugger.cursor() < len, "cursor {} out of {}", debugger.cursor(), len);
    }
}

/// Every step line reports the given status
pub fn assert_all_lines(debugger: &Debugger, status: LineStatus) {
    for step in debugger.steps() {
        assert_eq!(debugger.line_state(step.line).status, status, "line {}", step.line);
    }
}
