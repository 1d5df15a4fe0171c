//! Dragon Clicker progression logic — pure functions, fully testable.
//!
//! Every operation either applies its full effect or leaves the state
//! untouched; preconditions gate the effect, there are no error values. The
//! wall clock enters only through `now_ms` parameters so native tests can
//! supply synthetic time.

use crate::time::TICKS_PER_SEC;

use super::state::{Evolution, GameState, Particle, ENERGY_UNIT_MS, POWER_PER_LEVEL};

/// Ticks between auto-earn applications (one second).
const AUTO_EARN_INTERVAL: u32 = TICKS_PER_SEC;
/// Ticks between energy reconciliations (sixty seconds).
const ENERGY_CHECK_INTERVAL: u32 = 60 * TICKS_PER_SEC;
/// Lifetime of a floating "+N" particle (1000 ms).
const PARTICLE_LIFE: u32 = TICKS_PER_SEC;
/// Particle cap; oldest are dropped first.
const MAX_PARTICLES: usize = 20;

/// Manual click. Requires one unit of energy; with an empty bar the click
/// is rejected and nothing changes. Returns whether the click was accepted.
pub fn click(state: &mut GameState) -> bool {
    if state.energy == 0 {
        return false;
    }
    state.dragon.coins += state.click_power;
    state.total_clicks += 1;
    state.energy -= 1;
    state.click_flash = 3;
    spawn_click_particle(state);
    true
}

/// Spawn the floating "+N" marker above the dragon.
fn spawn_click_particle(state: &mut GameState) {
    let col_offset = (state.next_random() % 13) as i16 - 6; // -6..+6
    let text = format!("+{} {}", state.click_power, state.dragon.element.symbol());
    state.particles.push(Particle {
        text,
        col_offset,
        life: PARTICLE_LIFE,
        max_life: PARTICLE_LIFE,
    });
    if state.particles.len() > MAX_PARTICLES {
        state.particles.remove(0);
    }
}

/// Buy one point of click power. Cost: `click_power × 10` coins.
/// Returns false (and changes nothing) when unaffordable — the UI disables
/// the button, but the check here is what actually guards the coins.
pub fn upgrade_power(state: &mut GameState) -> bool {
    let cost = state.power_upgrade_cost();
    if state.dragon.coins < cost {
        return false;
    }
    state.dragon.coins -= cost;
    state.click_power += 1;
    state.purchase_flash = 5;
    state.add_log(
        &format!("クリック強化！ 威力 {} になった", state.click_power),
        false,
    );
    true
}

/// Buy one level. Cost: `level × 50` coins. Raises display power by 5 and
/// recomputes the evolution tier.
pub fn upgrade_level(state: &mut GameState) -> bool {
    let cost = state.level_upgrade_cost();
    if state.dragon.coins < cost {
        return false;
    }
    state.dragon.coins -= cost;
    state.dragon.level += 1;
    state.dragon.power += POWER_PER_LEVEL;
    state.purchase_flash = 5;
    state.add_log(&format!("レベルアップ！ Lv.{}", state.dragon.level), false);
    if recompute_evolution(state) {
        state.add_log(
            &format!("✦ 進化！{}になった！", state.dragon.evolution.name()),
            true,
        );
    }
    true
}

/// Recompute the evolution tier from the current level. Returns whether the
/// stored tier changed; calling again without a level change is a no-op.
pub fn recompute_evolution(state: &mut GameState) -> bool {
    let tier = Evolution::for_level(state.dragon.level);
    if tier == state.dragon.evolution {
        return false;
    }
    state.dragon.evolution = tier;
    true
}

/// Advance the game by `delta_ticks` ticks (at [`TICKS_PER_SEC`]).
///
/// `now_ms` is the wall clock (epoch ms). Energy credit is computed from it
/// rather than from tick counts, so a tab suspended for an hour regenerates
/// an hour's worth on the next reconciliation.
pub fn tick(state: &mut GameState, delta_ticks: u32, now_ms: f64) {
    if delta_ticks == 0 {
        return;
    }
    state.anim_frame = state.anim_frame.wrapping_add(delta_ticks);

    if state.click_flash > 0 {
        state.click_flash = state.click_flash.saturating_sub(delta_ticks);
    }
    if state.purchase_flash > 0 {
        state.purchase_flash = state.purchase_flash.saturating_sub(delta_ticks);
    }
    for p in &mut state.particles {
        p.life = p.life.saturating_sub(delta_ticks);
    }
    state.particles.retain(|p| p.life > 0);

    // Passive income lands on whole-second boundaries. With auto_earn at
    // zero the coins are untouched, so idle frames stay churn-free.
    state.auto_earn_ticks += delta_ticks;
    while state.auto_earn_ticks >= AUTO_EARN_INTERVAL {
        state.auto_earn_ticks -= AUTO_EARN_INTERVAL;
        if state.auto_earn > 0 {
            state.dragon.coins += state.auto_earn;
        }
    }

    // Energy reconciliation runs on a one-minute cadence; the credit itself
    // comes from elapsed wall-clock time.
    state.energy_check_ticks += delta_ticks;
    if state.energy_check_ticks >= ENERGY_CHECK_INTERVAL {
        state.energy_check_ticks = 0;
        regenerate_energy(state, now_ms);
    }
}

/// Reconcile energy against the wall clock. Returns the units credited.
///
/// One unit per [`ENERGY_UNIT_MS`] of elapsed time, whole units only.
/// `last_energy_update` advances only when at least one unit is credited, so
/// partial progress toward the next unit survives zero-unit checks. While
/// the bar is full the timestamp is pinned to `now` — time spent at the cap
/// is not banked.
pub fn regenerate_energy(state: &mut GameState, now_ms: f64) -> u32 {
    if state.energy >= state.max_energy {
        state.last_energy_update = now_ms;
        return 0;
    }
    let elapsed = now_ms - state.last_energy_update;
    if elapsed < 0.0 {
        // Wall clock went backwards; restart the interval from here.
        state.last_energy_update = now_ms;
        return 0;
    }
    let units = (elapsed / ENERGY_UNIT_MS) as u32;
    if units == 0 {
        return 0;
    }
    let credited = units.min(state.max_energy - state.energy);
    state.energy += credited;
    state.last_energy_update = now_ms;
    credited
}

/// Format an integer with comma separators (1234567 → "1,234,567").
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.chars().rev().collect()
}

/// Time until the energy bar refills, as a short duration ("1時間23分").
/// None when already full.
pub fn refill_eta(energy: u32, max_energy: u32) -> Option<String> {
    if energy >= max_energy {
        return None;
    }
    let ms_left = (max_energy - energy) as f64 * ENERGY_UNIT_MS;
    let total_minutes = (ms_left / 60_000.0).ceil() as u64;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    Some(if hours > 0 {
        format!("{}時間{}分", hours, minutes)
    } else {
        format!("{}分", minutes)
    })
}

/// Milestone hint for the total-click stats card.
pub fn click_milestone_hint(total_clicks: u64) -> String {
    if total_clicks < 100 {
        format!("🔥まで: {}", 100 - total_clicks)
    } else if total_clicks < 500 {
        format!("⚡まで: {}", 500 - total_clicks)
    } else if total_clicks < 1000 {
        format!("💎まで: {}", 1000 - total_clicks)
    } else {
        "クリックマスター！👑".to_string()
    }
}
