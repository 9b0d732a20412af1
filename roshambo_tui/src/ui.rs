//! Stateless frame rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use roshambo::{Choice, Theme, Tone};

use crate::app::App;

/// Result banner colors, the classic win/lose/draw palette.
const WIN_COLOR: Color = Color::Rgb(0x6a, 0xc4, 0x75);
const LOSE_COLOR: Color = Color::Rgb(0xc4, 0x73, 0x6a);
const DRAW_COLOR: Color = Color::Rgb(0x58, 0x65, 0xf2);

/// Widget colors derived from the active theme.
struct Palette {
    bg: Color,
    fg: Color,
    dim: Color,
    accent: Color,
}

fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            bg: Color::Black,
            fg: Color::White,
            dim: Color::DarkGray,
            accent: Color::Cyan,
        },
        Theme::Light => Palette {
            bg: Color::White,
            fg: Color::Black,
            dim: Color::Gray,
            accent: Color::Blue,
        },
    }
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Win => WIN_COLOR,
        Tone::Lose => LOSE_COLOR,
        Tone::Draw => DRAW_COLOR,
    }
}

/// Renders one frame of the game.
pub fn draw(frame: &mut Frame, app: &App) {
    let theme = app.session().theme();
    let pal = palette(theme);
    let area = frame.area();

    // Theme background behind everything.
    frame.render_widget(Block::default().style(Style::default().bg(pal.bg)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Hands
            Constraint::Length(3), // Result banner
            Constraint::Length(3), // Score
            Constraint::Length(3), // Help
        ])
        .split(area);

    draw_title(frame, chunks[0], &pal);
    draw_hands(frame, chunks[1], app, &pal);
    draw_result(frame, chunks[2], app, &pal);
    draw_score(frame, chunks[3], app, &pal);
    draw_help(frame, chunks[4], theme, &pal);
}

fn draw_title(frame: &mut Frame, area: Rect, pal: &Palette) {
    let title = Paragraph::new("Roshambo - Rock Paper Scissors")
        .style(
            Style::default()
                .fg(pal.accent)
                .bg(pal.bg)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).style(Style::default().bg(pal.bg)));
    frame.render_widget(title, area);
}

fn draw_hands(frame: &mut Frame, area: Rect, app: &App, pal: &Palette) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(20),
            Constraint::Percentage(40),
        ])
        .split(area);

    let shaking = app.session().is_animating();
    // Alternate the indent every few frames while the hands shake.
    let offset = if shaking && (app.frame() / 2) % 2 == 0 {
        2
    } else {
        0
    };

    draw_hand(frame, cols[0], "You", app.player_hand(), offset, pal);
    draw_prompt(frame, cols[1], app, pal);
    draw_hand(frame, cols[2], "Computer", app.computer_hand(), offset, pal);
}

fn draw_hand(frame: &mut Frame, area: Rect, title: &str, choice: Choice, offset: usize, pal: &Palette) {
    let indent = " ".repeat(offset);
    let lines: Vec<Line> = hand_art(choice)
        .iter()
        .map(|row| Line::from(format!("{indent}{row}")))
        .collect();

    let panel = Paragraph::new(lines)
        .style(Style::default().fg(pal.fg).bg(pal.bg))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {title} "))
                .style(Style::default().fg(pal.fg).bg(pal.bg)),
        );
    frame.render_widget(panel, area);
}

fn draw_prompt(frame: &mut Frame, area: Rect, app: &App, pal: &Palette) {
    // Vertically center the prompt between the hands.
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(area);

    let prompt = Paragraph::new(app.prompt())
        .style(Style::default().fg(pal.dim).bg(pal.bg))
        .alignment(Alignment::Center);
    frame.render_widget(prompt, rows[1]);
}

fn draw_result(frame: &mut Frame, area: Rect, app: &App, pal: &Palette) {
    let (text, style) = match app.last_report() {
        Some(report) => {
            let outcome = *report.outcome();
            (
                outcome.label(),
                Style::default()
                    .fg(tone_color(outcome.tone()))
                    .bg(pal.bg)
                    .add_modifier(Modifier::BOLD),
            )
        }
        None => ("", Style::default().fg(pal.fg).bg(pal.bg)),
    };

    let banner = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).style(Style::default().bg(pal.bg)));
    frame.render_widget(banner, area);
}

fn draw_score(frame: &mut Frame, area: Rect, app: &App, pal: &Palette) {
    let (player, computer) = app.session().score().snapshot();
    let score = Paragraph::new(format!("You {player}  :  {computer} Computer"))
        .style(Style::default().fg(pal.fg).bg(pal.bg).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Score ")
                .style(Style::default().bg(pal.bg)),
        );
    frame.render_widget(score, area);
}

fn draw_help(frame: &mut Frame, area: Rect, theme: Theme, pal: &Palette) {
    let theme_hint = match theme {
        Theme::Dark => "light mode",
        Theme::Light => "dark mode",
    };
    let help = Paragraph::new(format!(
        "r/p/s or 1-3: throw | n: reset | t: {theme_hint} | q: quit"
    ))
    .style(Style::default().fg(pal.dim).bg(pal.bg))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).style(Style::default().bg(pal.bg)));
    frame.render_widget(help, area);
}

/// ASCII art for each hand.
fn hand_art(choice: Choice) -> [&'static str; 6] {
    match choice {
        Choice::Rock => [
            "    _______      ",
            "---'   ____)     ",
            "      (_____)    ",
            "      (_____)    ",
            "      (____)     ",
            "---.__(___)      ",
        ],
        Choice::Paper => [
            "    _______      ",
            "---'   ____)____ ",
            "          ______)",
            "          ______)",
            "         _______)",
            "---.____________)",
        ],
        Choice::Scissors => [
            "    _______      ",
            "---'   ____)____ ",
            "          ______)",
            "       __________)",
            "      (____)     ",
            "---.__(___)      ",
        ],
    }
}
