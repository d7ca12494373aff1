use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{
    CELL_WIDTH, GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD_DOWN, GLYPH_SNAKE_HEAD_LEFT,
    GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP, GridSize, Theme,
};
use crate::game::GameStatus;
use crate::input::Direction;
use crate::scene::Scene;
use crate::snake::Position;
use crate::ui::hud::{HUD_GAP_X, hud_width, render_hud};
use crate::ui::menu::{render_pause_menu, render_start_menu};

/// Session details drawn over the board that the engine does not own.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overlay<'a> {
    /// Text typed into the start screen name field so far.
    pub name_input: &'a str,
    /// Validation message from the last refused start.
    pub notice: Option<&'a str>,
}

/// Renders one full frame from a scene snapshot.
pub fn render(frame: &mut Frame<'_>, scene: &Scene, overlay: Overlay<'_>, theme: &Theme) {
    let board_area = board_rect(frame.area(), scene);
    let play_area = render_hud(frame, board_area, scene, theme);

    let block = Block::bordered()
        .border_style(Style::new().fg(theme.border_fg))
        .style(Style::new().bg(theme.play_bg));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, scene, theme);
    render_snake(frame, inner, scene, theme);

    match scene.status {
        GameStatus::NotStarted => render_start_menu(
            frame,
            play_area,
            overlay.name_input,
            overlay.notice,
            theme,
        ),
        GameStatus::Paused => render_pause_menu(frame, play_area, theme),
        GameStatus::Running => {}
    }
}

/// Bordered board plus the side panel, centered in `area`.
fn board_rect(area: Rect, scene: &Scene) -> Rect {
    let width = scene
        .bounds
        .width
        .saturating_mul(CELL_WIDTH)
        .saturating_add(2 + HUD_GAP_X)
        .saturating_add(hud_width(scene));
    let height = scene.bounds.height.saturating_add(2);

    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [board] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);
    board
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, scene: &Scene, theme: &Theme) {
    let Some(food) = scene.food else {
        return;
    };
    let Some((x, y)) = logical_to_terminal(inner, scene.bounds, food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, scene: &Scene, theme: &Theme) {
    let buffer = frame.buffer_mut();

    // Tail first so the head wins when segments overlap.
    for (index, segment) in scene.snake.iter().enumerate().rev() {
        let Some((x, y)) = logical_to_terminal(inner, scene.bounds, *segment) else {
            continue;
        };

        if index == 0 {
            buffer.set_string(
                x,
                y,
                head_glyph(scene.heading),
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
        } else {
            buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body));
        }
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

/// Maps a 1-indexed grid cell to the top-left terminal column/row of its glyph.
fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x - 1).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(position.y - 1).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;

    use crate::config::{GameConfig, GridSize, THEME_CLASSIC};
    use crate::game::GameState;
    use crate::results::RecentResults;
    use crate::scene::Scene;
    use crate::snake::Position;

    use super::{Overlay, logical_to_terminal, render};

    fn rows(buffer: &Buffer) -> Vec<String> {
        let width = usize::from(buffer.area.width);
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    fn draw(scene: &Scene, overlay: Overlay<'_>) -> Vec<String> {
        let mut terminal =
            Terminal::new(TestBackend::new(80, 24)).expect("test backend should initialize");
        terminal
            .draw(|frame| render(frame, scene, overlay, &THEME_CLASSIC))
            .expect("draw should succeed");
        rows(terminal.backend().buffer())
    }

    #[test]
    fn cells_are_two_columns_wide_and_one_indexed() {
        let inner = Rect::new(1, 1, 40, 20);
        let bounds = GridSize::square(20);

        assert_eq!(logical_to_terminal(inner, bounds, Position::new(1, 1)), Some((1, 1)));
        assert_eq!(logical_to_terminal(inner, bounds, Position::new(20, 20)), Some((39, 20)));
        assert_eq!(logical_to_terminal(inner, bounds, Position::new(21, 1)), None);
        assert_eq!(logical_to_terminal(inner, bounds, Position::new(0, 1)), None);
    }

    #[test]
    fn start_screen_shows_name_field_and_notice() {
        let state = GameState::new_with_seed(GameConfig::default(), 1);
        let scene = Scene::capture(&state, &RecentResults::default());

        let text = draw(
            &scene,
            Overlay {
                name_input: "Zed",
                notice: Some("please enter a name"),
            },
        )
        .join("\n");

        assert!(text.contains("SNAKE"));
        assert!(text.contains("Name: Zed_"));
        assert!(text.contains("please enter a name"));
        assert!(text.contains("Last Game 1: 000"));
    }

    #[test]
    fn running_frame_draws_head_food_and_score() {
        let mut state = GameState::new_with_seed(GameConfig::default(), 2);
        state.start("Zed").expect("valid name should start");
        state.food = Position::new(3, 4);
        let scene = Scene::capture(&state, &RecentResults::from_scores([7]));

        let text = draw(&scene, Overlay::default()).join("\n");

        assert!(text.contains("█▶"));
        assert!(text.contains("()"));
        assert!(text.contains("Zed: 000"));
        assert!(text.contains("High 000"));
        assert!(text.contains("Last Game 1: 7"));
        assert!(!text.contains("SNAKE"));
    }

    #[test]
    fn paused_frame_shows_pause_popup() {
        let mut state = GameState::new_with_seed(GameConfig::default(), 3);
        state.start("Zed").expect("valid name should start");
        state.pause();
        let scene = Scene::capture(&state, &RecentResults::default());

        let text = draw(&scene, Overlay::default()).join("\n");

        assert!(text.contains("PAUSED"));
    }
}
