use crate::constants::{MENU_BAR_ANGLE_DEG, MENU_BAR_SHIFT_PX, MENU_TWEEN_SEC};

use super::style::Props;
use super::tween::{Ease, Tween};

/// Bar transforms for the closed (`false`) or open (`true`) icon.
pub fn bar_targets(open: bool) -> [Props; 3] {
    if !open {
        return [Props::NATURAL; 3];
    }
    [
        Props {
            rotation: MENU_BAR_ANGLE_DEG,
            y: MENU_BAR_SHIFT_PX,
            ..Props::NATURAL
        },
        Props {
            opacity: 0.0,
            ..Props::NATURAL
        },
        Props {
            rotation: -MENU_BAR_ANGLE_DEG,
            y: -MENU_BAR_SHIFT_PX,
            ..Props::NATURAL
        },
    ]
}

/// Open/closed hamburger icon. Toggling redirects the three bar tweens from
/// wherever they currently are.
#[derive(Clone, Debug)]
pub struct MenuState {
    open: bool,
    bars: [Tween<Props>; 3],
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuState {
    pub fn new() -> Self {
        Self {
            open: false,
            bars: bar_targets(false).map(|p| Tween::settled(p, Ease::Power1Out)),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the state and return the new one.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        let targets = bar_targets(self.open);
        for (bar, target) in self.bars.iter_mut().zip(targets) {
            bar.retarget(target, MENU_TWEEN_SEC);
        }
        self.open
    }

    pub fn advance(&mut self, dt: f32) -> [Props; 3] {
        for bar in &mut self.bars {
            bar.advance(dt);
        }
        self.bars()
    }

    pub fn bars(&self) -> [Props; 3] {
        [
            self.bars[0].value(),
            self.bars[1].value(),
            self.bars[2].value(),
        ]
    }

    pub fn is_settled(&self) -> bool {
        self.bars.iter().all(|b| b.is_complete())
    }
}
