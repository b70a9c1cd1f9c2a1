//! Test fixture generators

use codeflow_core::DebuggerConfig;

/// Recursive factorial followed by a module-level assignment
pub const FACTORIAL: &str = "def f(n):\n    if n <= 1:\n        return 1\n    return n * f(n - 1)\nx = 10\n";

/// Class whose only attribute-like assignment lives inside `__init__`
pub const CLASS_WITH_INIT: &str = "class Point:\n    def __init__(self):\n        self.x = 0\n";

/// A bit of everything, used for end-to-end runs
pub const MIXED: &str = "\
import math

LIMIT = 10

class Shape:
    sides = 0

    def __init__(self, name):
        self.name = name

    def area(self):
        return 0

def total(values, start=0):
    acc = start
    for v in values:
        if v > LIMIT:
            continue
        acc = acc + v
    while acc > 100:
        acc = acc - 100
    return acc

result = total([1, 2, 3])
";

/// Three non-blank statements for the line-based path
pub const THREE_LINES: &str = "int a = 1;\nint b = 2;\nint c = a + b;\n";

/// Generate a Python file with N simple assignments
pub fn fixture_n_assignments(n: usize) -> String {
    (0..n).map(|i| format!("v_{i} = {i}\n")).collect()
}

/// Configuration whose simulated steps never fault
pub fn never_failing() -> DebuggerConfig {
    DebuggerConfig::default()
        .with_error_probability(0.0)
        .with_seed(11)
}

/// Configuration whose simulated steps always fault
pub fn always_failing() -> DebuggerConfig {
    DebuggerConfig::default()
        .with_error_probability(1.0)
        .with_seed(11)
}
