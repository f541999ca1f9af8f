//! Dice tray state and the dice rendering collaborator

/// Dice currently on the table plus the subset selected for reroll.
///
/// `dice` and `dice_states` are indexed by the same die index; `reroll_tray`
/// holds die indices in selection order.
#[derive(Debug, Clone)]
pub struct DiceTrayState<D, S> {
    pub reroll_tray: Vec<usize>,
    pub dice: Vec<D>,
    pub dice_states: Vec<S>,
}

impl<D, S> Default for DiceTrayState<D, S> {
    fn default() -> Self {
        Self {
            reroll_tray: Vec::new(),
            dice: Vec::new(),
            dice_states: Vec::new(),
        }
    }
}

impl<D, S> DiceTrayState<D, S> {
    pub fn new(dice: Vec<D>, dice_states: Vec<S>) -> Self {
        Self {
            reroll_tray: Vec::new(),
            dice,
            dice_states,
        }
    }

    /// Definition and visual state of a die, if both exist
    pub fn die_at(&self, index: usize) -> Option<(&D, &S)> {
        Some((self.dice.get(index)?, self.dice_states.get(index)?))
    }

    /// Add a die to the tray, or take it out if already there.
    /// Returns whether the die is in the tray afterwards.
    pub fn toggle_reroll(&mut self, index: usize) -> bool {
        if let Some(pos) = self.reroll_tray.iter().position(|&i| i == index) {
            self.reroll_tray.remove(pos);
            return false;
        }
        if self.die_at(index).is_none() {
            tracing::warn!(index, "Ignoring reroll selection of unknown die");
            return false;
        }
        self.reroll_tray.push(index);
        true
    }

    pub fn clear_reroll_tray(&mut self) {
        self.reroll_tray.clear();
    }
}

/// External dice system that owns per-die 3D rendering
pub trait DiceSystem {
    type Die;
    type DieState;

    fn tray_state(&self) -> &DiceTrayState<Self::Die, Self::DieState>;

    /// Draw one die centered at `(x, y)` with edge length `size`
    #[allow(clippy::too_many_arguments)]
    fn draw_perspective_die(
        &self,
        surface: &mut dyn crate::render::DrawSurface,
        die: &Self::Die,
        x: f64,
        y: f64,
        size: f64,
        state: &Self::DieState,
        index: usize,
    );
}
