//! Dragon Clicker rendering (read-only from state, click targets registered
//! during draw).

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::{ClickableList, TabBar};

use super::actions::{CLICK_DRAGON, TAB_BASE, UPGRADE_LEVEL, UPGRADE_POWER};
use super::logic::{click_milestone_hint, format_number, refill_eta};
use super::state::{Element, Evolution, GameState, Tab};

/// Dragon art — idle animation frames (wings raised / lowered).
const DRAGON_ART: &[&[&str]] = &[
    &[
        r" \~          ~/ ",
        r"  \\  ,--,  //  ",
        r"   \\( o  o )// ",
        r"     ( ==== )   ",
        r"    /|      |\  ",
        r"     ^^    ^^   ",
    ],
    &[
        r"                ",
        r"  _,  ,--,  ,_  ",
        r"   \ ( o  o ) / ",
        r"     ( ==== )   ",
        r"    /|      |\  ",
        r"     ^^    ^^   ",
    ],
];

/// Pressed frame shown right after an accepted click.
const DRAGON_CLICK_ART: &[&str] = &[
    r"                ",
    r"  _,  ,--,  ,_  ",
    r"   \ ( >o< ) /  ",
    r"     ( **** )   ",
    r"    /|      |\  ",
    r"     ^^    ^^   ",
];

pub fn render(
    state: &GameState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    // Side log panel only on wide screens.
    let (main_area, log_area) = if is_narrow_layout(area.width) {
        (area, None)
    } else {
        let h_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);
        (h_chunks[0], Some(h_chunks[1]))
    };

    // Narrow screens get one tab per row (a 6-tab bar does not fit 40
    // columns); wide screens get a single-row bar.
    let tab_rows = if is_narrow_layout(area.width) {
        Tab::all().len() as u16
    } else {
        1
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),        // header
            Constraint::Length(tab_rows), // tab bar
            Constraint::Min(10),          // tab content
        ])
        .split(main_area);

    render_header(state, f, chunks[0]);
    render_tab_bar(state, f, chunks[1], click_state);
    match state.active_tab {
        Tab::Home => render_home(state, f, chunks[2], click_state),
        Tab::Upgrade => render_upgrade(state, f, chunks[2], click_state),
        tab => render_placeholder(tab, f, chunks[2]),
    }

    if let Some(log_area) = log_area {
        render_log(state, f, log_area);
    }
}

fn element_color(element: Element) -> Color {
    match element {
        Element::Fire => Color::Red,
        Element::Ice => Color::Cyan,
        Element::Lightning => Color::Yellow,
        Element::Earth => Color::Green,
    }
}

fn render_header(state: &GameState, f: &mut Frame, area: Rect) {
    let title = if is_narrow_layout(area.width) {
        " ドラゴンクリッカー "
    } else {
        " Dragon Clicker - ドラゴンクリッカー "
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(" 🪙 ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format_number(state.dragon.coins),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  Lv.{}", state.dragon.level),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                format!("  {}", state.dragon.evolution.name()),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                format!(" ⚡ {}/{}", state.energy, state.max_energy),
                Style::default().fg(Color::Blue),
            ),
            Span::styled(
                format!("  クリック +{}", state.click_power),
                Style::default().fg(Color::Gray),
            ),
        ]),
    ];

    // Purchase celebration: the frame lights up for a few ticks.
    let border_color = if state.purchase_flash > 0 {
        Color::Yellow
    } else {
        Color::Cyan
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_tab_bar(
    state: &GameState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut cs = click_state.borrow_mut();

    if area.height >= Tab::all().len() as u16 {
        // One tab per row; row-wide targets are easy to hit on a phone.
        for (i, tab) in Tab::all().iter().enumerate() {
            let row_y = area.y + i as u16;
            if row_y >= area.y + area.height {
                break;
            }
            let row_area = Rect::new(area.x, row_y, area.width, 1);
            let label = format!(" ▸ {} ", tab.name());
            f.render_widget(
                Paragraph::new(Line::from(Span::styled(label, tab_style(state, *tab)))),
                row_area,
            );
            cs.add_row_target(area, row_y, TAB_BASE + i as u16);
        }
        return;
    }

    let mut bar = TabBar::new("│");
    for (i, tab) in Tab::all().iter().enumerate() {
        bar = bar.tab(tab.name(), tab_style(state, *tab), TAB_BASE + i as u16);
    }
    bar.render(f, area, &mut cs);
}

fn tab_style(state: &GameState, tab: Tab) -> Style {
    if tab == state.active_tab {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else if tab.is_ready() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

// ── Home tab ───────────────────────────────────────────────────

fn render_home(
    state: &GameState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(13), // dragon display
            Constraint::Length(4),  // energy bar
            Constraint::Min(8),     // stats cards
        ])
        .split(area);

    render_dragon_display(state, f, chunks[0], click_state);
    render_energy_bar(state, f, chunks[1]);
    render_stats_cards(state, f, chunks[2]);
}

fn render_dragon_display(
    state: &GameState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut cs = click_state.borrow_mut();
    let mut cl = ClickableList::new();

    let inner_width = area.width.saturating_sub(2);
    cl.push(particle_row(state, inner_width, 0));
    cl.push(particle_row(state, inner_width, 1));

    let art: &[&str] = if state.click_flash > 0 {
        DRAGON_CLICK_ART
    } else {
        DRAGON_ART[(state.anim_frame as usize / 5) % DRAGON_ART.len()]
    };
    let art_style = Style::default().fg(element_color(state.dragon.element));
    for row in art {
        cl.push(Line::from(Span::styled(*row, art_style)).centered());
    }

    cl.push(
        Line::from(Span::styled(
            format!("{}ドラゴン", state.dragon.evolution.name()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
    );
    cl.push(
        Line::from(vec![
            Span::styled(
                format!("属性: {}", state.dragon.element.name()),
                Style::default().fg(element_color(state.dragon.element)),
            ),
            Span::styled(
                format!("  威力: {}", state.dragon.power),
                Style::default().fg(Color::Cyan),
            ),
        ])
        .centered(),
    );
    cl.push_clickable(
        Line::from(Span::styled(
            "▼ タップ / [C] キーでクリック ▼",
            Style::default().fg(Color::DarkGray),
        ))
        .centered(),
        CLICK_DRAGON,
    );

    // The whole display is the tap target; the hint row only restates it.
    cs.add_click_target(area, CLICK_DRAGON);
    cl.register_targets(area, &mut cs, 1, 1);

    let border_color = if state.click_flash > 0 {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" ドラゴン ");
    f.render_widget(Paragraph::new(cl.into_lines()).block(block), area);
}

/// Compose one particle row. Fresh particles sit on the lower row (1) and
/// rise to the upper row (0) over the second they live.
fn particle_row(state: &GameState, width: u16, row_idx: u32) -> Line<'static> {
    let mut cells: Vec<char> = vec![' '; width as usize];
    let center = width as i32 / 2;
    for p in &state.particles {
        let age = p.max_life.saturating_sub(p.life);
        let on_upper = age * 2 >= p.max_life;
        if (row_idx == 0) != on_upper {
            continue;
        }
        let start = center + p.col_offset as i32 - p.text.chars().count() as i32 / 2;
        for (i, ch) in p.text.chars().enumerate() {
            let pos = start + i as i32;
            if pos >= 0 && (pos as usize) < cells.len() {
                cells[pos as usize] = ch;
            }
        }
    }
    let text: String = cells.into_iter().collect();
    Line::from(Span::styled(text, Style::default().fg(Color::Yellow)))
}

fn render_energy_bar(state: &GameState, f: &mut Frame, area: Rect) {
    let bar_width = area.width.saturating_sub(4).max(10) as usize;
    let filled = state.energy as usize * bar_width / state.max_energy.max(1) as usize;
    let bar: String = "█".repeat(filled) + &"░".repeat(bar_width.saturating_sub(filled));

    let bar_color = if state.energy == 0 {
        Color::Red
    } else if state.energy <= 30 {
        Color::Yellow
    } else {
        Color::Blue
    };

    let mut lines = vec![Line::from(vec![
        Span::raw(" "),
        Span::styled(bar, Style::default().fg(bar_color)),
    ])];

    let status = if state.energy == 0 {
        Line::from(Span::styled(
            " 🔋 エネルギー切れ！回復を待とう",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
    } else if let Some(eta) = refill_eta(state.energy, state.max_energy) {
        let mut spans = vec![
            Span::styled(
                format!(" {}/{}", state.energy, state.max_energy),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("  全回復まで {}", eta),
                Style::default().fg(Color::DarkGray),
            ),
        ];
        if state.energy <= 30 {
            spans.push(Span::styled(
                "  ⚠ 残りわずか",
                Style::default().fg(Color::Yellow),
            ));
        }
        Line::from(spans)
    } else {
        Line::from(Span::styled(
            format!(" {}/{}  満タン", state.energy, state.max_energy),
            Style::default().fg(Color::White),
        ))
    };
    lines.push(status);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue))
        .title(" エネルギー ");
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_stats_cards(state: &GameState, f: &mut Frame, area: Rect) {
    let clicks = state.total_clicks;

    // Progress toward the next hundred clicks.
    let bar_width = 20usize;
    let progress = (clicks % 100) as usize * bar_width / 100;
    let progress_bar: String =
        "▰".repeat(progress) + &"▱".repeat(bar_width.saturating_sub(progress));

    let lines = vec![
        stat_line("クリック威力", format!("+{}", state.click_power), Color::Yellow),
        stat_line("自動収入", format!("{}/秒", state.auto_earn), Color::Green),
        stat_line("レベル", format!("{}", state.dragon.level), Color::Cyan),
        stat_line(
            "総クリック",
            format!("{}{}", format_number(clicks), click_badges(clicks)),
            Color::Magenta,
        ),
        Line::from(vec![
            Span::raw(" "),
            Span::styled(progress_bar, Style::default().fg(Color::Magenta)),
        ]),
        Line::from(Span::styled(
            format!(" {}", click_milestone_hint(clicks)),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title(" ステータス ");
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn stat_line(label: &str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {}: ", label), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(color).add_modifier(Modifier::BOLD)),
    ])
}

/// Milestone badges shown next to the click counter.
fn click_badges(total_clicks: u64) -> String {
    let mut badges = String::new();
    if total_clicks > 100 {
        badges.push_str(" 🔥");
    }
    if total_clicks > 500 {
        badges.push_str(" ⚡");
    }
    if total_clicks > 1000 {
        badges.push_str(" 💎");
    }
    badges
}

// ── Upgrade tab ────────────────────────────────────────────────

fn render_upgrade(
    state: &GameState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    // Evolution panel height depends on its (possibly wrapped) content.
    let mut evo = ClickableList::new();
    evo.push(Line::from(Span::styled(
        " レベルで自動進化：",
        Style::default().fg(Color::Gray),
    )));
    for tier in Evolution::all() {
        let current = *tier == state.dragon.evolution;
        let marker = if current { "▶" } else { " " };
        let style = if current {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else if *tier <= state.dragon.evolution {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        evo.push(Line::from(Span::styled(
            format!(" {} {}  Lv.{}〜", marker, tier.name(), tier.min_level()),
            style,
        )));
    }
    let inner_width = area.width.saturating_sub(2).max(1);
    let evo_height = evo.visual_height(inner_width) + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),          // purchase rows
            Constraint::Length(evo_height), // evolution grid
            Constraint::Length(4),          // energy bar
            Constraint::Min(0),
        ])
        .split(area);

    render_purchases(state, f, chunks[0], click_state);

    let evo_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta))
        .title(" 進化 ");
    f.render_widget(
        Paragraph::new(evo.into_lines())
            .wrap(Wrap { trim: false })
            .block(evo_block),
        chunks[1],
    );

    render_energy_bar(state, f, chunks[2]);
}

fn render_purchases(
    state: &GameState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut cs = click_state.borrow_mut();
    let mut cl = ClickableList::new();

    cl.push_clickable(
        purchase_row(
            '1',
            "クリック強化",
            format!("威力 +{} → +{}", state.click_power, state.click_power + 1),
            state.power_upgrade_cost(),
            state.can_upgrade_power(),
        ),
        UPGRADE_POWER,
    );
    cl.push_clickable(
        purchase_row(
            '2',
            "レベルアップ",
            format!("Lv.{} → {}", state.dragon.level, state.dragon.level + 1),
            state.level_upgrade_cost(),
            state.can_upgrade_level(),
        ),
        UPGRADE_LEVEL,
    );
    cl.push(Line::from(Span::styled(
        " 行をタップして購入",
        Style::default().fg(Color::DarkGray),
    )));

    cl.register_targets(area, &mut cs, 1, 1);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" 強化メニュー ");
    f.render_widget(Paragraph::new(cl.into_lines()).block(block), area);
}

fn purchase_row(
    key: char,
    name: &str,
    detail: String,
    cost: u64,
    affordable: bool,
) -> Line<'static> {
    let name_color = if affordable {
        Color::White
    } else {
        Color::DarkGray
    };
    let cost_color = if affordable {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    Line::from(vec![
        Span::styled(
            format!(" [{}] ", key),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{}  ", name), Style::default().fg(name_color)),
        Span::styled(format!("{}  ", detail), Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{} 🪙", format_number(cost)),
            Style::default().fg(cost_color),
        ),
    ])
}

// ── Placeholder tabs ───────────────────────────────────────────

fn render_placeholder(tab: Tab, f: &mut Frame, area: Rect) {
    let mut cl = ClickableList::new();
    cl.push(
        Line::from(Span::styled(
            "🚧 準備中…",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
    );
    cl.push(Line::from(""));
    cl.push(
        Line::from(Span::styled(
            format!("「{}」は開発中です。お楽しみに！", tab.name()),
            Style::default().fg(Color::Gray),
        ))
        .centered(),
    );

    // Center the notice vertically in whatever space the tab got.
    let inner_width = area.width.saturating_sub(2).max(1);
    let content_height = cl.visual_height(inner_width);
    let pad = area
        .height
        .saturating_sub(2)
        .saturating_sub(content_height)
        / 2;

    let mut lines: Vec<Line> = Vec::new();
    for _ in 0..pad {
        lines.push(Line::from(""));
    }
    lines.extend(cl.into_lines());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {} ", tab.name()));
    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

// ── Log panel ──────────────────────────────────────────────────

fn render_log(state: &GameState, f: &mut Frame, area: Rect) {
    let visible = area.height.saturating_sub(2) as usize;
    let start = state.log.len().saturating_sub(visible);

    let lines: Vec<Line> = state.log[start..]
        .iter()
        .map(|entry| {
            if entry.is_important {
                Line::from(Span::styled(
                    entry.text.clone(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    entry.text.clone(),
                    Style::default().fg(Color::Gray),
                ))
            }
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue))
        .title(" ログ ");
    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}
