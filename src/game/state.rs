/// Dragon Clicker game state definitions.

/// Dragon element, fixed when the dragon is created. Nothing in the game
/// changes it afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Element {
    Fire,
    Ice,
    Lightning,
    Earth,
}

impl Element {
    /// Display name.
    pub fn name(&self) -> &str {
        match self {
            Element::Fire => "炎",
            Element::Ice => "氷",
            Element::Lightning => "雷",
            Element::Earth => "地",
        }
    }

    /// Symbol used by the floating click particles.
    pub fn symbol(&self) -> &str {
        match self {
            Element::Fire => "🔥",
            Element::Ice => "❄",
            Element::Lightning => "⚡",
            Element::Earth => "🪨",
        }
    }
}

/// Evolution tier, derived from level and nothing else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Evolution {
    Hatchling,
    Juvenile,
    Adult,
    Ancient,
}

impl Evolution {
    /// All tiers in ascending order.
    pub fn all() -> &'static [Evolution] {
        &[
            Evolution::Hatchling,
            Evolution::Juvenile,
            Evolution::Adult,
            Evolution::Ancient,
        ]
    }

    /// The tier for a given level.
    pub fn for_level(level: u32) -> Self {
        if level >= 75 {
            Evolution::Ancient
        } else if level >= 50 {
            Evolution::Adult
        } else if level >= 25 {
            Evolution::Juvenile
        } else {
            Evolution::Hatchling
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        match self {
            Evolution::Hatchling => "幼竜",
            Evolution::Juvenile => "若竜",
            Evolution::Adult => "成竜",
            Evolution::Ancient => "古代竜",
        }
    }

    /// Minimum level at which this tier is reached.
    pub fn min_level(&self) -> u32 {
        match self {
            Evolution::Hatchling => 1,
            Evolution::Juvenile => 25,
            Evolution::Adult => 50,
            Evolution::Ancient => 75,
        }
    }
}

/// Which tab is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Home,
    Upgrade,
    Shop,
    Quests,
    Rating,
    Friends,
}

impl Tab {
    /// All tabs in display order.
    pub fn all() -> &'static [Tab] {
        &[
            Tab::Home,
            Tab::Upgrade,
            Tab::Shop,
            Tab::Quests,
            Tab::Rating,
            Tab::Friends,
        ]
    }

    /// Tab label.
    pub fn name(&self) -> &str {
        match self {
            Tab::Home => "ホーム",
            Tab::Upgrade => "強化",
            Tab::Shop => "ショップ",
            Tab::Quests => "任務",
            Tab::Rating => "順位",
            Tab::Friends => "友達",
        }
    }

    /// Whether the tab has real content (the rest are under construction).
    pub fn is_ready(&self) -> bool {
        matches!(self, Tab::Home | Tab::Upgrade)
    }
}

/// Core dragon stats.
#[derive(Clone, Debug)]
pub struct DragonStats {
    /// Starts at 1, raised only by the level upgrade.
    pub level: u32,
    /// Currency. Never goes negative: every deduction is guarded.
    pub coins: u64,
    /// Cosmetic display stat, +5 per level-up.
    pub power: u32,
    pub element: Element,
    /// Derived from `level`; recomputed exactly when the level changes.
    pub evolution: Evolution,
}

/// Coin cost of the next click-power upgrade per current click power.
pub const POWER_UPGRADE_RATE: u64 = 10;
/// Coin cost of the next level-up per current level.
pub const LEVEL_UPGRADE_RATE: u64 = 50;
/// Display power gained per level-up.
pub const POWER_PER_LEVEL: u32 = 5;

/// Energy capacity.
pub const MAX_ENERGY: u32 = 300;
/// The full bar regenerates over two hours of wall-clock time.
pub const ENERGY_REFILL_MS: f64 = 2.0 * 60.0 * 60.0 * 1000.0;
/// Milliseconds per regenerated energy unit (24 seconds).
pub const ENERGY_UNIT_MS: f64 = ENERGY_REFILL_MS / MAX_ENERGY as f64;

/// A floating text particle ("+N" rising from the dragon after a click).
#[derive(Clone, Debug)]
pub struct Particle {
    pub text: String,
    /// Column offset from the center of the dragon display.
    pub col_offset: i16,
    /// Remaining lifetime in ticks (counts down).
    pub life: u32,
    /// Starting lifetime (for computing the rise).
    pub max_life: u32,
}

/// Message log entry.
#[derive(Clone, Debug)]
pub struct LogEntry {
    pub text: String,
    pub is_important: bool,
}

/// Full state of a Dragon Clicker session. Created once at session start,
/// mutated in place, gone when the page is.
pub struct GameState {
    pub dragon: DragonStats,
    /// Coins gained per accepted click (base 1, +1 per power upgrade).
    pub click_power: u64,
    /// Passive income in coins per second. Nothing in the game raises this
    /// above zero yet; the passive tick already honors it.
    pub auto_earn: u64,
    pub total_clicks: u64,
    /// Click fuel, `0..=max_energy`. Each accepted click burns one unit.
    pub energy: u32,
    pub max_energy: u32,
    /// Epoch ms of the last energy reconciliation that credited units.
    pub last_energy_update: f64,

    // ── UI-transient state ──────────────────────────────────────
    pub active_tab: Tab,
    pub particles: Vec<Particle>,
    /// Dragon "pressed" frame timer (ticks remaining).
    pub click_flash: u32,
    /// Purchase celebration flash timer.
    pub purchase_flash: u32,
    /// Animation frame counter (incremented every tick).
    pub anim_frame: u32,
    /// Message log.
    pub log: Vec<LogEntry>,
    /// Simple RNG word for particle spread.
    pub rng_state: u32,
    /// Ticks accumulated toward the next one-second auto-earn application.
    pub auto_earn_ticks: u32,
    /// Ticks accumulated toward the next one-minute energy reconciliation.
    pub energy_check_ticks: u32,
}

impl GameState {
    pub fn new(element: Element, now_ms: f64) -> Self {
        let mut state = Self {
            dragon: DragonStats {
                level: 1,
                coins: 0,
                power: 1,
                element,
                evolution: Evolution::Hatchling,
            },
            click_power: 1,
            auto_earn: 0,
            total_clicks: 0,
            energy: MAX_ENERGY,
            max_energy: MAX_ENERGY,
            last_energy_update: now_ms,
            active_tab: Tab::Home,
            particles: Vec::new(),
            click_flash: 0,
            purchase_flash: 0,
            anim_frame: 0,
            log: Vec::new(),
            rng_state: 42,
            auto_earn_ticks: 0,
            energy_check_ticks: 0,
        };
        state.add_log("ドラゴンクリッカーへようこそ！", true);
        state.add_log("ドラゴンをタップしてコインを稼ごう。", false);
        state
    }

    /// Cost of the next click-power upgrade.
    pub fn power_upgrade_cost(&self) -> u64 {
        self.click_power * POWER_UPGRADE_RATE
    }

    /// Cost of the next level-up.
    pub fn level_upgrade_cost(&self) -> u64 {
        self.dragon.level as u64 * LEVEL_UPGRADE_RATE
    }

    /// Whether the power upgrade is affordable right now. The purchase
    /// re-checks this itself; this exists so the UI can gray the button out.
    pub fn can_upgrade_power(&self) -> bool {
        self.dragon.coins >= self.power_upgrade_cost()
    }

    /// Whether the level upgrade is affordable right now.
    pub fn can_upgrade_level(&self) -> bool {
        self.dragon.coins >= self.level_upgrade_cost()
    }

    pub fn add_log(&mut self, text: &str, is_important: bool) {
        self.log.push(LogEntry {
            text: text.to_string(),
            is_important,
        });
        if self.log.len() > 50 {
            self.log.remove(0);
        }
    }

    /// xorshift32. UI-only randomness (particle spread); never touches the
    /// progression math.
    pub fn next_random(&mut self) -> u32 {
        let mut x = self.rng_state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.rng_state = x;
        x
    }
}
