//! Balance simulator for Dragon Clicker.
//! Run with: cargo test simulate_ -- --nocapture

use crate::game::logic::{self, format_number};
use crate::game::state::{Element, Evolution, GameState};
use crate::time::TICKS_PER_SEC;

/// What to buy next.
enum Purchase {
    Power,
    Level,
}

/// Greedy strategy: take whichever upgrade is affordable, preferring the
/// level-up on ties — levels are what the player is chasing.
fn next_purchase(state: &GameState) -> Option<Purchase> {
    match (state.can_upgrade_power(), state.can_upgrade_level()) {
        (false, false) => None,
        (true, false) => Some(Purchase::Power),
        (false, true) => Some(Purchase::Level),
        (true, true) => {
            if state.level_upgrade_cost() <= state.power_upgrade_cost() {
                Some(Purchase::Level)
            } else {
                Some(Purchase::Power)
            }
        }
    }
}

fn report(state: &GameState, seconds: u32, purchases: u32) {
    let minutes = seconds / 60;
    let secs = seconds % 60;
    eprintln!("┌─── {}分{}秒 ─────────────────────────", minutes, secs);
    eprintln!(
        "│ コイン: {}  総クリック: {}  威力 +{}",
        format_number(state.dragon.coins),
        format_number(state.total_clicks),
        state.click_power
    );
    eprintln!(
        "│ Lv.{} ({})  エネルギー: {}/{}  購入: {}回",
        state.dragon.level,
        state.dragon.evolution.name(),
        state.energy,
        state.max_energy,
        purchases
    );
    eprintln!("└────────────────────────────────────");
}

/// Simulate `total_seconds` of play at a steady click rate, buying greedily,
/// and check the progression invariants after every simulated second.
fn simulate(total_seconds: u32, clicks_per_second: u32) {
    let mut state = GameState::new(Element::Fire, 0.0);
    let report_times: [u32; 6] = [60, 300, 600, 1800, 3600, 7200];
    let mut next_report = 0usize;
    let mut purchases: u32 = 0;
    let mut rejected_clicks: u64 = 0;
    let mut prev_level = state.dragon.level;

    eprintln!("\n========================================");
    eprintln!("  ドラゴンクリッカー バランスシミュレーター");
    eprintln!(
        "  プレイ時間: {}分  クリック速度: {}/秒",
        total_seconds / 60,
        clicks_per_second
    );
    eprintln!("========================================");

    for second in 1..=total_seconds {
        let now_ms = second as f64 * 1000.0;

        for _ in 0..clicks_per_second {
            if !logic::click(&mut state) {
                rejected_clicks += 1;
            }
        }
        logic::tick(&mut state, TICKS_PER_SEC, now_ms);

        while let Some(purchase) = next_purchase(&state) {
            let bought = match purchase {
                Purchase::Power => logic::upgrade_power(&mut state),
                Purchase::Level => logic::upgrade_level(&mut state),
            };
            assert!(bought, "affordable purchase must not fail");
            purchases += 1;
        }

        // Invariants hold after every simulated second.
        assert!(state.energy <= state.max_energy);
        assert!(state.dragon.level >= prev_level);
        assert_eq!(
            state.dragon.evolution,
            Evolution::for_level(state.dragon.level)
        );
        prev_level = state.dragon.level;

        if next_report < report_times.len() && second == report_times[next_report] {
            report(&state, second, purchases);
            next_report += 1;
        }
    }

    eprintln!("\n──── 最終結果 ────");
    report(&state, total_seconds, purchases);
    eprintln!(
        "エネルギー切れで弾かれたクリック: {}",
        format_number(rejected_clicks)
    );
}

#[test]
fn simulate_casual_half_hour() {
    simulate(1800, 2);
}

#[test]
fn simulate_frantic_two_hours() {
    simulate(7200, 5);
}
