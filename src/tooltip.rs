//! Hover label state, one per chart instance.

use crate::config::TOOLTIP_OFFSET;
use crate::utils::tooltip_text;
use std::rc::Rc;
use yew::Reducible;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TooltipAction {
    /// Pointer entered a cell.
    Enter,
    /// Pointer moved over a cell holding `value`, at viewport position `(x, y)`.
    Move { value: f64, x: f64, y: f64 },
    /// Pointer left a cell.
    Leave,
}

/// Floating label shown while hovering heatmap cells.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tooltip {
    pub visible: bool,
    pub text: String,
    pub left: f64,
    pub top: f64,
}

impl Tooltip {
    pub fn apply(&self, action: TooltipAction) -> Tooltip {
        match action {
            TooltipAction::Enter => Tooltip {
                visible: true,
                ..self.clone()
            },
            TooltipAction::Move { value, x, y } => Tooltip {
                visible: self.visible,
                text: tooltip_text(value),
                left: x + TOOLTIP_OFFSET,
                top: y + TOOLTIP_OFFSET,
            },
            TooltipAction::Leave => Tooltip {
                visible: false,
                ..self.clone()
            },
        }
    }
}

impl Reducible for Tooltip {
    type Action = TooltipAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}
