//! Render orchestration for the Rotfield TUI

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use rotfield_core::{ViewTab, VERSION};

use crate::app::{App, InputMode};
use crate::ui::widgets::{
    HotkeyBarWidget, LocationDetailWidget, MapWidget, PrinciplesWidget, PromptWidget,
    StatusBarWidget, TerminalWidget,
};

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title bar
            Constraint::Length(1), // location tabs
            Constraint::Min(10),   // main content
            Constraint::Length(1), // status bar
            Constraint::Length(1), // hotkey bar
        ])
        .split(area);

    render_title_bar(frame, app, rows[0]);
    render_location_tabs(frame, app, rows[1]);
    render_main(frame, app, rows[2]);

    let status = StatusBarWidget::new(
        app.session.current_location(),
        app.session.tab(),
        app.input_mode,
        &app.theme,
    )
    .necro(app.necro_sight)
    .message(app.status_message());
    frame.render_widget(status, rows[3]);

    frame.render_widget(HotkeyBarWidget::new(app.input_mode, &app.theme), rows[4]);

    if app.show_help {
        render_help_overlay(frame, app, area);
    }
}

/// Header: product mark on the left, sight indicator on the right
fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let title = Line::from(vec![
        Span::styled("∞ ", Style::default().fg(app.theme.title_rot)),
        Span::styled(
            "FLOAT.",
            Style::default()
                .fg(app.theme.title_float)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Rotfield",
            Style::default()
                .fg(app.theme.title_rot)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" v{VERSION}"), app.theme.muted_style()),
    ]);
    frame.render_widget(Paragraph::new(title), area);

    if app.necro_sight {
        let indicator = Line::from(Span::styled(
            "NECROMANTIC SIGHT ACTIVE ",
            Style::default().fg(app.theme.necro),
        ));
        frame.render_widget(
            Paragraph::new(indicator).alignment(Alignment::Right),
            area,
        );
    }
}

/// The five location tabs, in registration order
fn render_location_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let active = app.session.location();
    let mut spans: Vec<Span> = Vec::new();

    for (index, location) in app.session.registry().iter().enumerate() {
        let style =
            app.theme
                .location_tab_style(location.theme, location.id == active, app.necro_sight);
        spans.push(Span::styled(
            format!(" {}:{} ", index + 1, location.name),
            style,
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_main(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(5)])
        .split(columns[0]);

    render_view_tabs(frame, app, left[0]);

    match app.session.tab() {
        ViewTab::Map => {
            let map = MapWidget::new(app.session.location(), &app.theme).necro(app.necro_sight);
            frame.render_widget(map, left[1]);
        }
        ViewTab::Terminal => render_terminal_view(frame, app, left[1]),
        ViewTab::About => render_about_view(frame, app, left[1]),
    }

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(columns[1]);

    let detail = LocationDetailWidget::new(
        app.session.current_location(),
        app.session.registry(),
        &app.theme,
    )
    .necro(app.necro_sight);
    frame.render_widget(detail, right[0]);

    frame.render_widget(PrinciplesWidget::new(&app.theme), right[1]);
}

/// The map/terminal/about switcher row
fn render_view_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let active = app.session.tab();
    let mut spans: Vec<Span> = Vec::new();

    for tab in ViewTab::ALL {
        spans.push(Span::styled(
            format!(" {} ", tab.title()),
            app.theme.view_tab_style(tab == active),
        ));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Transcript over prompt, the prompt pinned to the bottom
fn render_terminal_view(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let terminal = TerminalWidget::new(app.session.transcript(), &app.theme)
        .scroll(app.transcript_scroll)
        .focused(app.input_mode == InputMode::Insert);
    frame.render_widget(terminal, rows[0]);

    let prompt = PromptWidget::new(app.input_buffer(), &app.theme)
        .cursor_position(app.cursor_position())
        .active(app.input_mode == InputMode::Insert)
        .cursor_visible(app.cursor_visible());
    frame.render_widget(prompt, rows[1]);
}

fn render_about_view(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" About ")
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(false));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let body = Style::default().fg(app.theme.foreground);
    let lines = vec![
        Line::from(Span::styled(
            "Shacks, Not Cathedrals",
            Style::default()
                .fg(app.theme.title_float)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Rotfield grew from burnout. A way to build that embraces imperfection, \
             adaptability, and organic growth.",
            body,
        )),
        Line::from(""),
        Line::from(Span::styled(
            "In this swamp, we learn: don't build cathedrals—perfect, rigid, doomed to \
             crumble. Build shacks—adaptable, alive, forgiving.",
            body,
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Rotfield isn't just a metaphor—it's how we build. Shacks for half-built \
             ideas. Boardwalks linking thoughts, always mending. Gardens for tended \
             knowledge. Bone piles—chat logs, old notes—sacred ruins for note necromancy.",
            body,
        )),
        Line::from(""),
        Line::from(Span::styled(
            "From Rotfield came FLOAT—a ritual, not a product. A system to hold chaos \
             without purity. Small pieces, loosely joined, built for neuroqueer cognition.",
            body,
        )),
        Line::from(""),
        Line::from(Span::styled(
            "\"This is not a cathedral. This is Rotfield — the living field of the \
             Bloom Keeper.\"",
            Style::default()
                .fg(app.theme.necro)
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let popup = centered_rect_fixed(58, 18, area);

    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(true));

    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let key = Style::default()
        .fg(app.theme.title_float)
        .add_modifier(Modifier::BOLD);
    let text = Style::default().fg(app.theme.foreground);

    let entry = |k: &str, desc: &str| {
        Line::from(vec![
            Span::styled(format!("  {k:<12}"), key),
            Span::styled(desc.to_string(), text),
        ])
    };

    let lines = vec![
        Line::from(Span::styled("Keys", key)),
        entry("i or /", "focus the terminal prompt"),
        entry("m t a", "map / terminal / about view"),
        entry("Tab S-Tab", "cycle locations"),
        entry("1-5", "jump to a location"),
        entry("n", "toggle necromantic sight"),
        entry("j k g G", "scroll the transcript"),
        entry("q", "quit"),
        Line::from(""),
        Line::from(Span::styled("Terminal commands", key)),
        entry("help", "show available commands"),
        entry("visit <loc>", "navigate to a location"),
        entry("about", "about Rotfield"),
        entry("clear", "clear terminal output"),
        Line::from(""),
        Line::from(Span::styled("  Esc to close", app.theme.muted_style())),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// A fixed-size rect centered in `area`, clamped to fit.
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
