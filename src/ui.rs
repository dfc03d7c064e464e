//! Rendering: the scrollback viewport and the prompt line.

use crate::app::App;
use crate::config::Theme;
use crate::shell::output::{OutputLine, Tone};
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

/// Tone colors for one theme.
pub struct Palette {
    pub text: Color,
    pub muted: Color,
    pub success: Color,
    pub error: Color,
    pub accent: Color,
    pub prompt: Color,
    pub background: Color,
    pub border: Color,
}

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Night => Palette {
            text: Color::Rgb(0xb8, 0xff, 0xb2),
            muted: Color::Rgb(0x5d, 0x8a, 0x5b),
            success: Color::Rgb(0x5a, 0xff, 0x8d),
            error: Color::Rgb(0xff, 0x6b, 0x8f),
            accent: Color::Rgb(0x57, 0xf7, 0xff),
            prompt: Color::Rgb(0x58, 0xf5, 0x8e),
            background: Color::Rgb(0x06, 0x0a, 0x06),
            border: Color::Rgb(0x2a, 0x52, 0x2a),
        },
        Theme::Vibrant => Palette {
            text: Color::Rgb(0xf2, 0xe9, 0xff),
            muted: Color::Rgb(0x8d, 0x7b, 0xa8),
            success: Color::Rgb(0x7d, 0xff, 0x8a),
            error: Color::Rgb(0xff, 0x5c, 0x7a),
            accent: Color::Rgb(0xff, 0xb1, 0x4d),
            prompt: Color::Rgb(0xc4, 0x8a, 0xff),
            background: Color::Rgb(0x12, 0x08, 0x1c),
            border: Color::Rgb(0x4a, 0x2d, 0x6b),
        },
        Theme::Mint => Palette {
            text: Color::Rgb(0xd9, 0xff, 0xf2),
            muted: Color::Rgb(0x6a, 0x9c, 0x8c),
            success: Color::Rgb(0x57, 0xf0, 0xb5),
            error: Color::Rgb(0xff, 0x7a, 0x7a),
            accent: Color::Rgb(0x5f, 0xd9, 0xff),
            prompt: Color::Rgb(0x6e, 0xff, 0xc2),
            background: Color::Rgb(0x04, 0x10, 0x0c),
            border: Color::Rgb(0x1f, 0x4d, 0x3d),
        },
        Theme::Sunset => Palette {
            text: Color::Rgb(0xff, 0xe8, 0xd1),
            muted: Color::Rgb(0xa8, 0x7a, 0x5e),
            success: Color::Rgb(0xff, 0xc4, 0x5c),
            error: Color::Rgb(0xff, 0x5c, 0x5c),
            accent: Color::Rgb(0xff, 0x8a, 0x5c),
            prompt: Color::Rgb(0xff, 0xa8, 0x7a),
            background: Color::Rgb(0x14, 0x08, 0x04),
            border: Color::Rgb(0x5c, 0x2d, 0x14),
        },
    }
}

fn tone_color(tone: Tone, palette: &Palette) -> Color {
    match tone {
        Tone::Default => palette.text,
        Tone::Muted => palette.muted,
        Tone::Success => palette.success,
        Tone::Error => palette.error,
        Tone::Accent => palette.accent,
    }
}

pub fn draw(frame: &mut Frame, app: &App) {
    let palette = palette(app.session.theme());
    let [viewport_area, input_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).areas(frame.area());

    draw_viewport(frame, viewport_area, app, &palette);
    draw_input(frame, input_area, app, &palette);
}

fn draw_viewport(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let mut lines: Vec<Line> = Vec::new();

    for line in app.boot.log() {
        lines.push(toned_line(line, palette));
    }

    if !app.boot.is_booting() && app.session.entries().is_empty() {
        lines.push(Line::styled(
            "terminal ready -> try: help, man project, ls, cd /projects, cat list.txt, open rag",
            Style::default().fg(palette.accent),
        ));
    }

    for entry in app.session.entries() {
        lines.push(Line::default());
        lines.push(Line::styled(
            format!("nishanth@portfolio:{}$ {}", entry.cwd_at_run, entry.command),
            Style::default().fg(palette.prompt),
        ));
        for line in &entry.lines {
            lines.push(toned_line(line, palette));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(Span::styled(
            " NISHANTH.OS terminal ",
            Style::default().fg(palette.accent),
        ));
    let inner_height = block.inner(area).height as usize;

    // Bottom-anchored scroll; PageUp moves the window back through the log.
    let max_offset = lines.len().saturating_sub(inner_height);
    let offset = app.scroll_offset().min(max_offset);
    let top = max_offset - offset;

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().fg(palette.text).bg(palette.background))
        .scroll((top as u16, 0));
    frame.render_widget(paragraph, area);
}

fn draw_input(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let prompt = format!("nishanth@portfolio:{}$ ", app.session.prompt_path());
    let (input_text, input_color) = if app.boot.is_booting() {
        ("booting...".to_string(), palette.muted)
    } else {
        (app.input().to_string(), palette.text)
    };

    let line = Line::from(vec![
        Span::styled(prompt.clone(), Style::default().fg(palette.prompt)),
        Span::styled(input_text, Style::default().fg(input_color)),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));
    let inner = block.inner(area);
    frame.render_widget(
        Paragraph::new(line)
            .block(block)
            .style(Style::default().bg(palette.background)),
        area,
    );

    if !app.boot.is_booting() {
        let cursor_x = prompt.width() + app.input()[..app.cursor()].width();
        frame.set_cursor_position(Position::new(
            inner.x + cursor_x.min(inner.width.saturating_sub(1) as usize) as u16,
            inner.y,
        ));
    }
}

fn toned_line<'a>(line: &'a OutputLine, palette: &Palette) -> Line<'a> {
    Line::styled(
        line.text.as_str(),
        Style::default().fg(tone_color(line.tone, palette)),
    )
}
