use std::rc::Rc;
use yew::Reducible;

pub fn step_forward(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index + 1) % len
    }
}

pub fn step_back(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index + len - 1) % len
    }
}

/// Index over a fixed-size collection that a repeating timer advances.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rotation {
    len: usize,
    index: usize,
    paused: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RotationAction {
    /// Timer fired. Ignored while paused.
    Tick,
    Next,
    Prev,
    Select(usize),
    Pause,
    Resume,
}

impl Rotation {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0, paused: false }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn apply(&mut self, action: RotationAction) {
        match action {
            RotationAction::Tick => {
                if !self.paused {
                    self.index = step_forward(self.index, self.len);
                }
            }
            RotationAction::Next => self.index = step_forward(self.index, self.len),
            RotationAction::Prev => self.index = step_back(self.index, self.len),
            RotationAction::Select(i) => {
                self.index = if self.len == 0 { 0 } else { i % self.len };
            }
            RotationAction::Pause => self.paused = true,
            RotationAction::Resume => self.paused = false,
        }
    }
}

impl Reducible for Rotation {
    type Action = RotationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(rotation: &mut Rotation, ticks: usize) {
        for _ in 0..ticks {
            rotation.apply(RotationAction::Tick);
        }
    }

    #[test]
    fn three_hero_intervals_land_on_three() {
        let mut hero = Rotation::new(8);
        run(&mut hero, 3);
        assert_eq!(hero.index(), 3 % 8);
    }

    #[test]
    fn index_stays_in_bounds_for_any_tick_count() {
        for len in 1..=13 {
            let mut rotation = Rotation::new(len);
            for tick in 1..=100 {
                rotation.apply(RotationAction::Tick);
                assert!(rotation.index() < len);
                assert_eq!(rotation.index(), tick % len);
            }
        }
    }

    #[test]
    fn pause_stops_ticks_until_resumed() {
        let mut rotation = Rotation::new(5);
        run(&mut rotation, 2);
        rotation.apply(RotationAction::Pause);
        run(&mut rotation, 10);
        assert_eq!(rotation.index(), 2);
        assert!(rotation.is_paused());

        rotation.apply(RotationAction::Resume);
        run(&mut rotation, 1);
        assert_eq!(rotation.index(), 3);
    }

    #[test]
    fn manual_steps_work_while_paused_and_wrap() {
        let mut rotation = Rotation::new(4);
        rotation.apply(RotationAction::Pause);
        rotation.apply(RotationAction::Prev);
        assert_eq!(rotation.index(), 3);
        rotation.apply(RotationAction::Next);
        assert_eq!(rotation.index(), 0);
    }

    #[test]
    fn select_wraps_out_of_range_targets() {
        let mut rotation = Rotation::new(12);
        rotation.apply(RotationAction::Select(7));
        assert_eq!(rotation.index(), 7);
        rotation.apply(RotationAction::Select(30));
        assert_eq!(rotation.index(), 6);
    }

    #[test]
    fn empty_rotation_never_moves() {
        let mut rotation = Rotation::new(0);
        run(&mut rotation, 5);
        rotation.apply(RotationAction::Prev);
        rotation.apply(RotationAction::Select(3));
        assert_eq!(rotation.index(), 0);
    }

    #[test]
    fn reducer_keeps_identity_when_nothing_changes() {
        let paused = Rc::new(Rotation { len: 3, index: 1, paused: true });
        let same = paused.clone().reduce(RotationAction::Tick);
        assert!(Rc::ptr_eq(&paused, &same));
        let moved = paused.reduce(RotationAction::Next);
        assert_eq!(moved.index(), 2);
    }
}
