//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui Frame, and never
//! mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::card;
use crate::state::AppState;

/// Height of the raid tab strip.
const TABS_HEIGHT: u16 = 1;

/// Height of the key hint line.
const FOOTER_HEIGHT: u16 = 1;

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let [tabs_area, card_area, footer_area] = Layout::vertical([
        Constraint::Length(TABS_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(frame.area());

    render_tabs(app, frame, tabs_area);

    match app.active_card() {
        Some(active) => card::render_card(frame, active, card_area),
        None => frame.render_widget(
            Paragraph::new(" No matches to show.").style(Style::default().fg(Color::DarkGray)),
            card_area,
        ),
    }

    render_footer(frame, footer_area);
}

fn render_tabs(app: &AppState, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::with_capacity(app.cards.len() * 2);
    for (i, card) in app.cards.iter().enumerate() {
        let style = if i == app.active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let mut label = format!(" {} {} ", card.grouped.raid_name, card.grouped.difficulty);
        if card.selections.has_selection() {
            label.push_str(&format!("({}) ", card.selections.selected_count()));
        }
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    const HINTS: &[(&str, &str)] = &[
        ("←↑↓→", "move"),
        ("space", "select"),
        ("e", "more"),
        ("s", "share"),
        ("r", "reset"),
        ("tab", "raid"),
        ("q", "quit"),
    ];

    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::DarkGray);
    let spans: Vec<Span> = HINTS
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(format!(" {key}"), key_style),
                Span::styled(format!(" {action} "), text_style),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
