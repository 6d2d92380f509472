//! Screen layout: header, body and key hints.

use super::receipt_list::ReceiptList;
use super::styles::{ColorConfig, ReceiptStyles};
use crate::config::Settings;
use crate::i18n::{I18n, Key};
use crate::state::{ListScroll, RenderState, ViewState, derive_render_state};
use crate::time_format::{DisplayZone, TimeFormatter};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

/// Everything a frame needs besides the view state, resolved from the
/// current settings snapshot.
#[derive(Debug, Clone)]
pub struct ScreenContext {
    pub i18n: I18n,
    pub styles: ReceiptStyles,
    pub formatter: TimeFormatter,
    pub colors: ColorConfig,
}

impl ScreenContext {
    pub fn from_settings(settings: &Settings, zone: DisplayZone, colors: ColorConfig) -> Self {
        Self {
            i18n: I18n::new(settings.language),
            styles: ReceiptStyles::for_theme(settings.theme, colors),
            formatter: TimeFormatter::new(settings.time_format.clone(), zone),
            colors,
        }
    }
}

/// Height of the list viewport for a terminal of `height` lines.
pub fn body_height(height: u16) -> u16 {
    let (_, body, _) = split(Rect::new(0, 0, 1, height));
    body.height
}

/// Header, body and hint areas. The hint line is dropped on tiny terminals.
fn split(area: Rect) -> (Rect, Rect, Option<Rect>) {
    if area.height < 3 {
        let [header, body] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
        return (header, body, None);
    }
    let [header, body, hint] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);
    (header, body, Some(hint))
}

pub fn render_screen(
    frame: &mut Frame,
    state: &ViewState,
    ctx: &ScreenContext,
    scroll: &mut ListScroll,
) {
    let (header, body, hint) = split(frame.area());

    let title = Paragraph::new(format!(" {}", ctx.i18n.t(Key::ReadReceipt))).style(ctx.styles.header);
    frame.render_widget(title, header);

    match derive_render_state(state) {
        RenderState::Loading => render_loading(frame, body, ctx),
        RenderState::Empty => render_empty(frame, body, ctx),
        RenderState::Populated => {
            let list = ReceiptList::new(state.receipts(), &ctx.formatter, ctx.styles, ctx.colors);
            frame.render_stateful_widget(list, body, scroll);
        }
    }

    if let Some(hint) = hint {
        frame.render_widget(hints(ctx), hint);
    }
}

fn render_loading(frame: &mut Frame, area: Rect, ctx: &ScreenContext) {
    frame.render_widget(Block::default().style(ctx.styles.body), area);
    if area.height == 0 {
        return;
    }
    let middle = Rect {
        y: area.y + area.height / 2,
        height: 1,
        ..area
    };
    let indicator = Paragraph::new(ctx.i18n.t(Key::Loading))
        .style(ctx.styles.auxiliary)
        .alignment(Alignment::Center);
    frame.render_widget(indicator, middle);
}

fn render_empty(frame: &mut Frame, area: Rect, ctx: &ScreenContext) {
    frame.render_widget(Block::default().style(ctx.styles.empty), area);
    if area.height < 2 {
        return;
    }
    // One line of padding above the message.
    let line = Rect {
        y: area.y + 1,
        height: 1,
        ..area
    };
    let message = Paragraph::new(ctx.i18n.t(Key::NoReadReceipts))
        .style(ctx.styles.empty)
        .alignment(Alignment::Center);
    frame.render_widget(message, line);
}

fn hints(ctx: &ScreenContext) -> Paragraph<'static> {
    let entries = [
        ("j/k", Key::HintScroll),
        ("r", Key::HintReload),
        ("t", Key::HintTheme),
        ("q", Key::HintQuit),
    ];
    let mut spans = vec![Span::raw(" ")];
    for (i, (keys, label)) in entries.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(keys, ctx.styles.name));
        spans.push(Span::raw(" "));
        spans.push(Span::raw(ctx.i18n.t(label)));
    }
    Paragraph::new(Line::from(spans)).style(ctx.styles.hint)
}
