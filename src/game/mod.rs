//! Dragon Clicker — an incremental dragon-raising clicker game.

pub mod actions;
pub mod logic;
pub mod render;
pub mod state;

#[cfg(test)]
mod simulator;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};

use actions::{CLICK_DRAGON, TAB_BASE, UPGRADE_LEVEL, UPGRADE_POWER};
use state::{Element, GameState, Tab};

pub struct DragonGame {
    pub state: GameState,
}

impl DragonGame {
    /// `now_ms` seeds the energy clock (epoch ms; `Date.now()` in the
    /// browser, synthetic in tests).
    pub fn new(now_ms: f64) -> Self {
        Self {
            state: GameState::new(Element::Fire, now_ms),
        }
    }

    /// Handle an input event. Returns true if the event was consumed.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(c) => self.handle_key(*c),
            InputEvent::Click(id) => self.handle_click(*id),
        }
    }

    fn handle_key(&mut self, key: char) -> bool {
        // Tab switching works from anywhere.
        if let Some(tab) = tab_for_key(key) {
            self.state.active_tab = tab;
            return true;
        }

        match self.state.active_tab {
            Tab::Home => match key {
                'c' | ' ' => {
                    logic::click(&mut self.state);
                    true
                }
                _ => false,
            },
            Tab::Upgrade => match key {
                '1' => {
                    logic::upgrade_power(&mut self.state);
                    true
                }
                '2' => {
                    logic::upgrade_level(&mut self.state);
                    true
                }
                _ => false,
            },
            _ => false,
        }
    }

    fn handle_click(&mut self, action_id: u16) -> bool {
        match action_id {
            CLICK_DRAGON => {
                logic::click(&mut self.state);
                true
            }
            UPGRADE_POWER => {
                logic::upgrade_power(&mut self.state);
                true
            }
            UPGRADE_LEVEL => {
                logic::upgrade_level(&mut self.state);
                true
            }
            id if (TAB_BASE..TAB_BASE + Tab::all().len() as u16).contains(&id) => {
                self.state.active_tab = Tab::all()[(id - TAB_BASE) as usize];
                true
            }
            _ => false,
        }
    }

    /// Advance game logic by `delta_ticks` discrete ticks; `now_ms` is the
    /// wall clock feeding the energy reconciliation.
    pub fn tick(&mut self, delta_ticks: u32, now_ms: f64) {
        logic::tick(&mut self.state, delta_ticks, now_ms);
    }

    /// Render the game into the given area.
    pub fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.state, f, area, click_state);
    }
}

fn tab_for_key(key: char) -> Option<Tab> {
    match key {
        'h' => Some(Tab::Home),
        'u' => Some(Tab::Upgrade),
        's' => Some(Tab::Shop),
        'q' => Some(Tab::Quests),
        'r' => Some(Tab::Rating),
        'f' => Some(Tab::Friends),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::state::Evolution;

    #[test]
    fn click_via_key_earns_coins() {
        let mut game = DragonGame::new(0.0);
        assert!(game.handle_input(&InputEvent::Key('c')));
        assert_eq!(game.state.dragon.coins, 1);
        assert_eq!(game.state.energy, 299);
    }

    #[test]
    fn click_via_tap_earns_coins() {
        let mut game = DragonGame::new(0.0);
        assert!(game.handle_input(&InputEvent::Click(CLICK_DRAGON)));
        assert_eq!(game.state.dragon.coins, 1);
        assert_eq!(game.state.total_clicks, 1);
    }

    #[test]
    fn click_key_ignored_outside_home() {
        let mut game = DragonGame::new(0.0);
        game.state.active_tab = Tab::Upgrade;
        assert!(!game.handle_input(&InputEvent::Key('c')));
        assert_eq!(game.state.dragon.coins, 0);
    }

    #[test]
    fn upgrade_keys_only_work_on_upgrade_tab() {
        let mut game = DragonGame::new(0.0);
        game.state.dragon.coins = 100;

        // On Home, '1' is not an upgrade key.
        assert!(!game.handle_input(&InputEvent::Key('1')));
        assert_eq!(game.state.click_power, 1);

        game.handle_input(&InputEvent::Key('u'));
        assert!(game.handle_input(&InputEvent::Key('1')));
        assert_eq!(game.state.click_power, 2);
        assert_eq!(game.state.dragon.coins, 90);
    }

    #[test]
    fn upgrade_level_via_key() {
        let mut game = DragonGame::new(0.0);
        game.state.dragon.coins = 50;
        game.handle_input(&InputEvent::Key('u'));
        assert!(game.handle_input(&InputEvent::Key('2')));
        assert_eq!(game.state.dragon.level, 2);
        assert_eq!(game.state.dragon.coins, 0);
    }

    #[test]
    fn upgrades_via_click_actions() {
        let mut game = DragonGame::new(0.0);
        game.state.dragon.coins = 60;

        assert!(game.handle_input(&InputEvent::Click(UPGRADE_POWER)));
        assert_eq!(game.state.click_power, 2);
        assert_eq!(game.state.dragon.coins, 50);

        assert!(game.handle_input(&InputEvent::Click(UPGRADE_LEVEL)));
        assert_eq!(game.state.dragon.level, 2);
        assert_eq!(game.state.dragon.coins, 0);
    }

    #[test]
    fn doomed_upgrade_click_is_safe() {
        let mut game = DragonGame::new(0.0);
        // The UI grays the button out, but a click must still be harmless.
        assert!(game.handle_input(&InputEvent::Click(UPGRADE_POWER)));
        assert_eq!(game.state.click_power, 1);
        assert_eq!(game.state.dragon.coins, 0);
    }

    #[test]
    fn tab_navigation_via_keys() {
        let mut game = DragonGame::new(0.0);
        for (key, tab) in [
            ('u', Tab::Upgrade),
            ('s', Tab::Shop),
            ('q', Tab::Quests),
            ('r', Tab::Rating),
            ('f', Tab::Friends),
            ('h', Tab::Home),
        ] {
            assert!(game.handle_input(&InputEvent::Key(key)));
            assert_eq!(game.state.active_tab, tab);
        }
    }

    #[test]
    fn tab_navigation_via_click_actions() {
        let mut game = DragonGame::new(0.0);
        for (i, tab) in Tab::all().iter().enumerate() {
            assert!(game.handle_input(&InputEvent::Click(TAB_BASE + i as u16)));
            assert_eq!(game.state.active_tab, *tab);
        }
        // Out of range: not consumed.
        assert!(!game.handle_input(&InputEvent::Click(TAB_BASE + 6)));
    }

    #[test]
    fn unknown_inputs_not_consumed() {
        let mut game = DragonGame::new(0.0);
        assert!(!game.handle_input(&InputEvent::Key('z')));
        assert!(!game.handle_input(&InputEvent::Click(9_999)));
    }

    #[test]
    fn tick_drives_energy_reconciliation() {
        let mut game = DragonGame::new(0.0);
        game.state.energy = 0;
        // One minute of ticks with one minute on the wall clock: 2 units.
        game.tick(600, 60_000.0);
        assert_eq!(game.state.energy, 2);
    }

    #[test]
    fn session_reaches_juvenile() {
        let mut game = DragonGame::new(0.0);
        game.state.dragon.coins = 50 * 24 * 25; // plenty for 24 level-ups
        game.handle_input(&InputEvent::Key('u'));
        for _ in 0..24 {
            game.handle_input(&InputEvent::Key('2'));
        }
        assert_eq!(game.state.dragon.level, 25);
        assert_eq!(game.state.dragon.evolution, Evolution::Juvenile);
    }
}
