use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::game::Snapshot;

/// Values shown next to the engine snapshot.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo<'a> {
    pub theme: &'a Theme,
    pub paused: bool,
    /// Current frames per tick.
    pub frame_divisor: u32,
}

/// Renders the single HUD row below the play area.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot, info: &HudInfo<'_>) {
    let line = info_line(snapshot, info, usize::from(area.width));
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Right), area);
}

/// Builds the HUD line, dropping trailing fields that do not fit `max_width`.
fn info_line<'a>(snapshot: &Snapshot, info: &HudInfo<'a>, max_width: usize) -> Line<'a> {
    let fields = [
        ("Score", snapshot.score.to_string()),
        ("Length", snapshot.snake.len().to_string()),
        ("Pace", format!("1/{}", info.frame_divisor)),
        ("Ticks", snapshot.tick_count.to_string()),
    ];

    let label_style = Style::new().fg(info.theme.hud_muted);
    let value_style = Style::new()
        .fg(info.theme.hud_score)
        .add_modifier(Modifier::BOLD);

    let mut spans = Vec::new();
    let mut used = 0;
    if info.paused {
        let marker = "PAUSED";
        used += marker.width();
        spans.push(Span::styled(marker, value_style));
    }

    for (label, value) in fields {
        let separator = if spans.is_empty() { "" } else { "  " };
        let width = separator.width() + label.width() + 1 + value.width();
        if used + width > max_width {
            break;
        }
        used += width;

        spans.push(Span::styled(format!("{separator}{label} "), label_style));
        spans.push(Span::styled(value, value_style));
    }

    Line::from(spans)
}
