//! The uint8 arithmetic lesson: one pair of pixel values pushed through
//! every overflow-handling strategy, with worked explanations.

use luma_ops::{
    absolute_diff, saturating_add, saturating_divide, scaled_multiply, wrapping_add, wrapping_sub,
};
use serde::Serialize;

/// A single arithmetic outcome with its worked expression.
#[derive(Debug, Clone, Serialize)]
pub struct OpOutcome {
    pub result: u8,
    pub expression: String,
    pub explanation: String,
}

/// All six operations, keyed by their library names.
#[derive(Debug, Clone, Serialize)]
pub struct ArithmeticOperations {
    pub saturating_add: OpOutcome,
    pub wrapping_add: OpOutcome,
    pub wrapping_sub: OpOutcome,
    pub absolute_difference: OpOutcome,
    pub scaled_multiply: OpOutcome,
    pub saturating_divide: OpOutcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArithmeticReport {
    pub value1: u8,
    pub value2: u8,
    pub operations: ArithmeticOperations,
}

/// Computes the full lesson for `(value1, value2)`.
pub fn pixel_arithmetic(value1: u8, value2: u8) -> ArithmeticReport {
    let (v1, v2) = (value1 as u16, value2 as u16);
    let raw_sum = v1 + v2;
    let raw_sub = v1 as i32 - v2 as i32;
    let raw_product = v1 as u32 * v2 as u32;

    let saturating_add = OpOutcome {
        result: saturating_add(value1, value2),
        expression: format!("min({value1} + {value2}, 255)"),
        explanation: if raw_sum > 255 {
            format!("Raw sum {raw_sum} exceeds 255 and saturates to 255.")
        } else {
            format!("Raw sum {raw_sum} stays within [0, 255]; no saturation needed.")
        },
    };

    let wrapping_add = OpOutcome {
        result: wrapping_add(value1, value2),
        expression: format!("({value1} + {value2}) mod 256"),
        explanation: if raw_sum > 255 {
            format!(
                "Raw sum {raw_sum} overflows an 8-bit register and wraps to {}.",
                wrapping_add(value1, value2)
            )
        } else {
            "No overflow; modular and plain addition agree.".to_string()
        },
    };

    let wrapping_sub = OpOutcome {
        result: wrapping_sub(value1, value2),
        expression: format!("({value1} - {value2}) mod 256"),
        explanation: if raw_sub < 0 {
            format!(
                "Raw result {raw_sub} is negative and wraps to {}.",
                wrapping_sub(value1, value2)
            )
        } else {
            "No underflow; result stays within [0, 255].".to_string()
        },
    };

    let absolute_difference = OpOutcome {
        result: absolute_diff(value1, value2),
        expression: format!("|{value1} - {value2}|"),
        explanation: "Magnitude of the change; never overflows or underflows.".to_string(),
    };

    let scaled_multiply = OpOutcome {
        result: scaled_multiply(value1, value2),
        expression: format!("round({value1} * {value2} / 255)"),
        explanation: format!("Raw product {raw_product} is scaled by 1/255 to stay within range."),
    };

    let saturating_divide = OpOutcome {
        result: saturating_divide(value1, value2),
        expression: format!("round({value1} / {value2})"),
        explanation: if value2 == 0 {
            "Division by zero is undefined; the result saturates to 255.".to_string()
        } else {
            format!("Raw quotient {:.4} rounds to the nearest integer.", v1 as f64 / v2 as f64)
        },
    };

    ArithmeticReport {
        value1,
        value2,
        operations: ArithmeticOperations {
            saturating_add,
            wrapping_add,
            wrapping_sub,
            absolute_difference,
            scaled_multiply,
            saturating_divide,
        },
    }
}
