use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::canvas::CellCanvas;
use crate::config::BORDER_HALF_BLOCK;
use crate::game::{Phase, Snapshot};
use crate::ui::hud::{HudInfo, render_hud};
use crate::ui::menu::{render_game_over_menu, render_pause_menu};

/// Rows below the play area reserved for the HUD.
const HUD_HEIGHT: u16 = 1;

/// Draws the engine canvas, HUD and overlays into one terminal frame.
pub fn render(frame: &mut Frame<'_>, canvas: &CellCanvas, snapshot: &Snapshot, info: &HudInfo<'_>) {
    let (play_area, hud_area) = layout(frame.area(), canvas);
    let theme = info.theme;

    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(theme.border_fg).bg(theme.border_bg));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);
    frame.render_widget(canvas, inner);

    render_hud(frame, hud_area, snapshot, info);

    if snapshot.phase == Phase::Over {
        render_game_over_menu(frame, play_area, snapshot.score, snapshot.outcome, theme);
    } else if info.paused {
        render_pause_menu(frame, play_area, theme);
    }
}

/// Centres the bordered canvas and places the HUD row under it.
fn layout(area: Rect, canvas: &CellCanvas) -> (Rect, Rect) {
    let (width, height) = canvas.terminal_size();
    let outer_width = width.saturating_add(2);
    let outer_height = height.saturating_add(2);

    let [column] = Layout::horizontal([Constraint::Length(outer_width)])
        .flex(Flex::Center)
        .areas(area);
    let [play_area, hud_area] = Layout::vertical([
        Constraint::Length(outer_height),
        Constraint::Length(HUD_HEIGHT),
    ])
    .flex(Flex::Center)
    .areas(column);

    (play_area, hud_area)
}
