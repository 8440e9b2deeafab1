use anyhow::Result;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::{Frame, Terminal};
// Use Popup from tui-widgets to render modals
use tui_widgets::popup::Popup;

use crate::config::{Keys, RgbColor};
use crate::contact::{Contact, Field};
use crate::directory::{Form, Modal};

use super::app::{App, PaneFocus};

const SEARCH_HINT: &str = "Type to filter by name or mobile";

/// Width of the value column in the form, so the popup does not resize while typing.
const FORM_VALUE_WIDTH: usize = 40;

pub fn render<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    terminal.draw(|frame| draw_frame(frame, app))?;
    Ok(())
}

fn draw_frame(frame: &mut Frame<'_>, app: &mut App) {
    let size = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(size);

    draw_header(frame, layout[0], app);
    draw_search(frame, layout[1], app);
    draw_list(frame, layout[2], app);
    draw_footer(frame, layout[3], app);
    draw_form_modal(frame, size, app);
    draw_view_modal(frame, size, app);
}

fn draw_header(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let total = app.directory.store().len();
    let visible = app.visible().len();
    let counts = if visible == total {
        format!("{} contact(s)", total)
    } else {
        format!("{} of {} contact(s)", visible, total)
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(counts.len() as u16)])
        .split(area);

    let title = Span::styled(
        "ALL CONTACTS",
        header_text_style(app).add_modifier(Modifier::BOLD),
    );
    frame.render_widget(Paragraph::new(Line::from(title)), chunks[0]);
    frame.render_widget(
        Paragraph::new(Span::styled(counts, header_text_style(app))),
        chunks[1],
    );
}

fn draw_search(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let active = app.directory.is_idle() && matches!(app.focused_pane, PaneFocus::Search);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(app));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let label = "SEARCH: ";
    let value = app.search_input.value();
    let line = if value.is_empty() && !active {
        Line::from(vec![
            Span::styled(label, header_text_style(app)),
            Span::styled("Search Contact", Style::default().fg(Color::DarkGray)),
        ])
    } else {
        let value_style = if active {
            selection_style(app)
        } else {
            Style::default()
        };
        Line::from(vec![
            Span::styled(label, header_text_style(app)),
            Span::styled(value.to_string(), value_style),
        ])
    };
    frame.render_widget(Paragraph::new(line), inner);

    if active {
        let column = Span::raw(label).width() + app.search_input.visual_cursor();
        frame.set_cursor_position((inner.x.saturating_add(column as u16), inner.y));
    }
}

fn draw_list(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(app));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible = app.visible();
    let items: Vec<ListItem> = if visible.is_empty() {
        let message = if app.directory.store().is_empty() {
            "No contacts"
        } else {
            "No matches"
        };
        vec![ListItem::new(Line::from(message))]
    } else {
        let name_width = visible
            .iter()
            .map(|c| c.name.chars().count())
            .max()
            .unwrap_or(0);
        let serial_width = visible.len().to_string().len();
        visible
            .iter()
            .enumerate()
            .map(|(index, contact)| build_contact_item(index, contact, serial_width, name_width))
            .collect()
    };

    let mut state = ListState::default();
    if !visible.is_empty() {
        state.select(Some(app.selected));
    }

    let list = List::new(items)
        .highlight_style(selection_style(app))
        .highlight_symbol(" ")
        .repeat_highlight_symbol(false);

    frame.render_stateful_widget(list, inner, &mut state);
}

fn build_contact_item(
    index: usize,
    contact: &Contact,
    serial_width: usize,
    name_width: usize,
) -> ListItem<'static> {
    // Serial numbers count rows of the visible list, not ids
    let text = format!(
        "{:>sw$}. {:<nw$}  {}",
        index + 1,
        contact.name,
        contact.mobile,
        sw = serial_width,
        nw = name_width
    );
    ListItem::new(Line::from(text))
}

// =============================================================================
// Help text built from the configured key bindings
// =============================================================================

/// First binding of each action, joined as `key: label`. Actions with no
/// binding are left out.
fn help_line(entries: &[(&[String], &str)]) -> String {
    entries
        .iter()
        .filter_map(|(bindings, label)| {
            let key = bindings.iter().map(|b| b.trim()).find(|b| !b.is_empty())?;
            Some(format!("{}: {}", key, label))
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn list_help(keys: &Keys) -> String {
    help_line(&[
        (&keys.global.quit, "quit"),
        (&keys.global.search, "search"),
        (&keys.global.add, "add"),
        (&keys.list.view, "view"),
        (&keys.list.edit, "edit"),
        (&keys.list.delete, "delete"),
        (&keys.list.next, "down"),
        (&keys.list.prev, "up"),
    ])
}

fn search_help(keys: &Keys) -> String {
    let actions = help_line(&[
        (&keys.search_input.cancel, "back to list"),
        (&keys.search_input.next, "down"),
        (&keys.search_input.prev, "up"),
    ]);
    format!("{}  {}", SEARCH_HINT, actions)
}

fn form_help(keys: &Keys) -> String {
    help_line(&[
        (&keys.form.submit, "save"),
        (&keys.form.cancel, "cancel"),
        (&keys.form.next, "next field"),
        (&keys.form.prev, "previous field"),
    ])
}

fn view_help(keys: &Keys) -> String {
    help_line(&[(&keys.view.close, "close")])
}

fn with_status(status: &Option<String>, help: String) -> String {
    match status {
        Some(status) => format!("{}  |  {}", status, help),
        None => help,
    }
}

fn draw_footer(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let keys = app.keys();
    let message: String = match app.directory.modal() {
        Modal::Adding(_) | Modal::Editing { .. } => with_status(&app.status, form_help(keys)),
        Modal::Viewing(_) => view_help(keys),
        Modal::Idle => match app.focused_pane {
            PaneFocus::Search => search_help(keys),
            PaneFocus::List => with_status(&app.status, list_help(keys)),
        },
    };
    let colors = app.ui_colors();
    let style = Style::default()
        .fg(color(colors.status_fg))
        .bg(color(colors.status_bg));

    let background = Block::default().style(Style::default().bg(color(colors.status_bg)));
    frame.render_widget(background, area);

    frame.render_widget(Paragraph::new(message).style(style), area);
}

fn draw_form_modal(frame: &mut Frame<'_>, area: Rect, app: &mut App) {
    let (title, form) = match app.directory.modal() {
        Modal::Adding(form) => ("ADD NEW CONTACT", form),
        Modal::Editing { form, .. } => ("EDIT CONTACT", form),
        _ => return,
    };

    let label_width = label_width();
    let (lines, cursor) = form_lines(app, form, label_width);

    let title_line = Line::from(Span::styled(title, header_text_style(app)));
    let popup = Popup::new(Text::from(lines))
        .title(title_line)
        .border_style(border_style(app));

    frame.render_stateful_widget_ref(popup, area, &mut app.modal_popup);

    if let (Some(popup_area), Some((row, column))) = (app.modal_popup.area(), cursor) {
        let inner = Block::default().borders(Borders::ALL).inner(*popup_area);
        let x = inner.x.saturating_add(column as u16);
        let y = inner.y.saturating_add(row as u16);
        frame.set_cursor_position((x, y));
    }
}

/// Form body lines, plus the (row, column) of the editing cursor.
fn form_lines(app: &App, form: &Form, label_width: usize) -> (Vec<Line<'static>>, Option<(usize, usize)>) {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut cursor = None;

    for field in Field::ALL {
        let focused = form.focus == field;
        let editing = app.editing_field() == Some(field);
        let (label_style, value_style) = line_styles(app, focused);
        let label = format!("{:width$} ", format!("{}:", field.label()), width = label_width);

        let value = if editing {
            cursor = Some((lines.len(), label.chars().count() + app.editor.visual_cursor()));
            app.editor.value().to_string()
        } else {
            form.draft.get(field).to_string()
        };

        lines.push(Line::from(vec![
            Span::styled(label, label_style),
            Span::styled(
                format!("{:<width$}", value, width = FORM_VALUE_WIDTH),
                value_style,
            ),
        ]));

        if let Some(message) = form.errors.get(field) {
            lines.push(Line::from(vec![
                Span::raw(" ".repeat(label_width + 1)),
                Span::styled(message, error_style(app)),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(form_help(app.keys()), header_text_style(app))));

    (lines, cursor)
}

fn draw_view_modal(frame: &mut Frame<'_>, area: Rect, app: &mut App) {
    let Modal::Viewing(contact) = app.directory.modal() else {
        return;
    };

    let label_width = label_width();
    let mut lines: Vec<Line> = Field::ALL
        .iter()
        .map(|field| {
            let label = format!("{:width$} ", format!("{}:", field.label()), width = label_width);
            Line::from(vec![
                Span::styled(label, header_text_style(app)),
                Span::raw(contact.get(*field).to_string()),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(view_help(app.keys()), header_text_style(app))));

    let title_line = Line::from(Span::styled("CONTACT DETAILS", header_text_style(app)));
    let popup = Popup::new(Text::from(lines))
        .title(title_line)
        .border_style(border_style(app));

    frame.render_stateful_widget_ref(popup, area, &mut app.modal_popup);
}

fn label_width() -> usize {
    Field::ALL
        .iter()
        .map(|f| f.label().len() + 1) // +1 for colon
        .max()
        .unwrap_or(0)
}

fn line_styles(app: &App, highlight: bool) -> (Style, Style) {
    if highlight {
        let style = selection_style(app);
        (style, style)
    } else {
        (header_text_style(app), Style::default())
    }
}

fn selection_style(app: &App) -> Style {
    let colors = app.ui_colors();
    Style::default()
        .fg(color(colors.selection_fg))
        .bg(color(colors.selection_bg))
}

fn border_style(app: &App) -> Style {
    let colors = app.ui_colors();
    Style::default().fg(color(colors.border))
}

fn header_text_style(app: &App) -> Style {
    let colors = app.ui_colors();
    Style::default().fg(color(colors.separator))
}

fn error_style(app: &App) -> Style {
    let colors = app.ui_colors();
    Style::default().fg(color(colors.error))
}

fn color(rgb: RgbColor) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}
