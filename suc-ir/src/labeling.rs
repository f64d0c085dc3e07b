//! Sethi-Ullman register labeling
//!
//! Each node is labeled with the number of registers needed to evaluate its
//! subtree without spilling. A leaf that is the right child of its parent is
//! consumed in place and needs no register of its own.

use log::trace;
use suc_frontend::{Expression, ExpressionKind};

/// Floor applied to the register count reported to users. The object code
/// scheme always occupies R1 and R2, even for a lone operand.
pub const MIN_REGISTERS: u32 = 2;

/// Label every node of `tree` in place and return the root's label.
///
/// The root itself is treated as a left operand, so a lone leaf gets 1.
pub fn label_tree(tree: &mut Expression) -> u32 {
    label_node(tree, false)
}

/// Registers to report for a tree whose root carries `root_label`
pub fn register_requirement(root_label: u32) -> u32 {
    root_label.max(MIN_REGISTERS)
}

fn label_node(node: &mut Expression, is_right_child: bool) -> u32 {
    let label = match &mut node.kind {
        ExpressionKind::Leaf(_) => {
            if is_right_child {
                0
            } else {
                1
            }
        }
        ExpressionKind::Binary { left, right, .. } => {
            let left_need = label_node(left, false);
            let right_need = label_node(right, true);
            combine(left_need, right_need)
        }
    };

    trace!("label {} at {} = {}", node.symbol(), node.location, label);
    node.label = label;
    label
}

/// Equal needs cost one extra register to hold the first result while the
/// second is computed; otherwise the larger side's registers are reused.
fn combine(left_need: u32, right_need: u32) -> u32 {
    if left_need == right_need {
        left_need + 1
    } else {
        left_need.max(right_need)
    }
}
