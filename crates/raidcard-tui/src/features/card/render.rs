//! Raid card view.
//!
//! Pure rendering: reads `CardState`, draws to the frame, never mutates.

use raidcard_core::{Candidate, Role, format_power};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::card::{CardState, Focus};
use crate::common::{fit_to_width, truncate_with_ellipsis};
use crate::share::CopyStatus;

/// Header rows inside the card border.
const HEADER_HEIGHT: u16 = 4;

const SELECTED_COLOR: Color = Color::Yellow;
const DAMAGE_COLOR: Color = Color::Red;
const SUPPORT_COLOR: Color = Color::Blue;

pub fn render_card(frame: &mut Frame, card: &CardState, area: Rect) {
    let [header_area, body_area] =
        Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)]).areas(area);

    render_header(frame, card, header_area);
    render_slots(frame, card, body_area);
}

fn render_header(frame: &mut Frame, card: &CardState, area: Rect) {
    let grouped = &card.grouped;
    let display = card.aggregate();
    let stats = display.aggregate;

    let difficulty_color = match grouped.difficulty.as_str() {
        "하드" => Color::Red,
        "나메" => Color::Magenta,
        _ => Color::Blue,
    };

    let title_line = Line::from(vec![
        Span::styled(
            format!(" {} ", grouped.difficulty),
            Style::default()
                .fg(difficulty_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("Lv.{} ", grouped.level),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            grouped.raid_name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);

    let avg_style = if display.is_from_selection() {
        Style::default()
            .fg(SELECTED_COLOR)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut stats_spans = vec![
        Span::styled(" 평균 전투력 ", Style::default().fg(Color::DarkGray)),
        Span::styled(format_power(stats.average_power), avg_style),
        Span::raw("   "),
        Span::styled(
            format!("⚔ {}", stats.damage_count),
            Style::default().fg(DAMAGE_COLOR),
        ),
        Span::raw("  "),
        Span::styled(
            format!("✚ {}", stats.support_count),
            Style::default().fg(SUPPORT_COLOR),
        ),
    ];

    let selected = card.selections.selected_count();
    if selected > 0 {
        let copy_style = match card.copy.status {
            CopyStatus::Idle => Style::default().fg(Color::Gray),
            CopyStatus::Copied => Style::default().fg(Color::Green),
            CopyStatus::Failed => Style::default().fg(Color::Red),
        };
        stats_spans.extend([
            Span::raw("   "),
            Span::styled(
                format!("{selected}명 선택됨"),
                Style::default().fg(SELECTED_COLOR),
            ),
            Span::styled("  [s] ", Style::default().fg(Color::DarkGray)),
            Span::styled(card.copy.label(), copy_style),
            Span::styled("  [r] 초기화", Style::default().fg(Color::DarkGray)),
        ]);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(
        Paragraph::new(vec![title_line, Line::from(stats_spans)]).block(block),
        area,
    );
}

fn render_slots(frame: &mut Frame, card: &CardState, area: Rect) {
    let slots: Vec<usize> = card.rendered_slots().collect();
    if slots.is_empty() {
        frame.render_widget(
            Paragraph::new(" No candidates for this raid.")
                .style(Style::default().fg(Color::DarkGray)),
            area,
        );
        return;
    }

    let constraints = vec![Constraint::Ratio(1, slots.len() as u32); slots.len()];
    let columns = Layout::horizontal(constraints).split(area);

    for (slot, column) in slots.into_iter().zip(columns.iter()) {
        render_slot(frame, card, slot, *column);
    }
}

fn render_slot(frame: &mut Frame, card: &CardState, slot: usize, area: Rect) {
    let grouped = &card.grouped;
    let slot_data = &grouped.slots[slot];
    let is_focused_slot = card.cursor.slot == slot;
    let inner_width = area.width.saturating_sub(2) as usize;

    let rows = card.rows(slot);
    let selected = card.selections.get(slot).index();
    let mut lines: Vec<Line<'static>> = Vec::new();

    for (row, focus) in card.focus_items(slot).into_iter().enumerate() {
        let has_cursor = is_focused_slot && card.cursor.row == row;
        match focus {
            Focus::Candidate(position) => {
                let candidate = &slot_data.candidates[position];
                let is_selected = selected == Some(position);
                let duplicate =
                    is_selected && card.selections.is_selected_elsewhere(grouped, slot, candidate);
                lines.extend(candidate_lines(
                    candidate,
                    is_selected,
                    has_cursor,
                    duplicate,
                    inner_width,
                ));
            }
            Focus::ExpandControl => {
                let label = if card.visibility.is_expanded(slot) {
                    "접기 ▴".to_string()
                } else {
                    format!("더 보기 (+{}) ▾", rows.hidden_count)
                };
                lines.push(Line::from(Span::styled(
                    format!(" {label}"),
                    cursor_style(has_cursor).fg(Color::DarkGray),
                )));
            }
        }
    }

    let border_color = if is_focused_slot {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    let title = format!(
        " {} · {} 캐릭터 ",
        truncate_with_ellipsis(&slot_data.label, inner_width.saturating_sub(10)),
        slot_data.len()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(title);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn cursor_style(has_cursor: bool) -> Style {
    if has_cursor {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    }
}

fn role_color(role: Role) -> Color {
    match role {
        Role::Damage => DAMAGE_COLOR,
        Role::Support => SUPPORT_COLOR,
    }
}

/// Two or three lines per candidate: name/level, power/class/role, synergy.
fn candidate_lines(
    candidate: &Candidate,
    is_selected: bool,
    has_cursor: bool,
    duplicate: bool,
    width: usize,
) -> Vec<Line<'static>> {
    let marker = if is_selected { "●" } else { "○" };
    let name_style = if is_selected {
        Style::default()
            .fg(SELECTED_COLOR)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let level = format!("Lv.{}", candidate.level_label());
    let dup_tag = if duplicate { " dup" } else { "" };
    let name_width = width.saturating_sub(level.len() + dup_tag.len() + 4);

    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!(" {marker} "),
            cursor_style(has_cursor).fg(role_color(candidate.role)),
        ),
        Span::styled(
            fit_to_width(&candidate.name, name_width),
            cursor_style(has_cursor).patch(name_style),
        ),
        Span::styled(dup_tag, Style::default().fg(Color::Magenta)),
        Span::styled(format!(" {level}"), Style::default().fg(Color::DarkGray)),
    ])];

    let class = match candidate.ark_passive.as_deref() {
        Some(passive) if !passive.is_empty() => format!("{} · {passive}", candidate.class_name),
        _ => candidate.class_name.clone(),
    };
    lines.push(Line::from(vec![
        Span::raw("   "),
        Span::styled(
            format_power(candidate.power),
            if is_selected {
                Style::default().fg(SELECTED_COLOR)
            } else {
                Style::default().fg(Color::Gray)
            },
        ),
        Span::raw(" "),
        Span::styled(
            truncate_with_ellipsis(&class, width.saturating_sub(20)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(" "),
        Span::styled(
            candidate.role.label(),
            Style::default().fg(role_color(candidate.role)),
        ),
    ]));

    if let Some(synergy) = candidate.visible_synergy() {
        lines.push(Line::from(Span::styled(
            format!(
                "   ⚡ {}",
                truncate_with_ellipsis(synergy, width.saturating_sub(5))
            ),
            Style::default().fg(Color::LightYellow),
        )));
    }

    lines
}
