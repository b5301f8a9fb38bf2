//! The UI renders the application state into something visible and vim-able.
//!
//! The outline is flattened through the tree's own pre-order traversal and
//! drawn as a list with box-drawing characters. Nodes in edit mode render as
//! an input field with a trailing cursor glyph; the bottom bar doubles as
//! help line, status line and command prompt.

use crate::app_state::{AppState, View};
use crate::node::Node;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Renders the active view based on current application state.
pub fn draw(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    draw_outline(f, app, chunks[0]);

    let bottom = match app.current_view {
        View::Command => format!(":{}", app.command_buffer),
        View::List => {
            if let Some(ref msg) = app.message {
                msg.clone()
            } else if app.current_is_editing() {
                "Type text | Enter: Commit & New | Esc: Commit | Tab/S-Tab: Indent/Dedent"
                    .to_string()
            } else {
                "↑/↓: Navigate | Enter: New Sibling | a: New Child | Tab/S-Tab: Indent/Dedent | :w Save | q: Quit"
                    .to_string()
            }
        }
    };
    let bottom_widget = Paragraph::new(bottom).block(Block::default().borders(Borders::ALL));
    f.render_widget(bottom_widget, chunks[1]);
}

/// Generate box-drawing prefix for tree structure
fn tree_prefix(depth: usize, is_last: bool, parent_states: &[bool]) -> String {
    if depth == 0 {
        return String::new();
    }

    let mut prefix = String::new();

    // Draw vertical lines for parent levels
    for i in 0..depth.saturating_sub(1) {
        if i < parent_states.len() && parent_states[i] {
            prefix.push_str("│   ");
        } else {
            prefix.push_str("    ");
        }
    }

    // Draw branch for current level
    if is_last {
        prefix.push_str("└── ");
    } else {
        prefix.push_str("├── ");
    }

    prefix
}

fn draw_outline(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let rows: Vec<(&Node, usize)> = app.outline.traverse().collect();

    // A row is "last" at its depth when no later row shares that depth
    // before the walk climbs back above it.
    let mut is_last_at_depth: Vec<bool> = vec![false; rows.len()];
    for (i, (_, depth)) in rows.iter().enumerate() {
        let mut found_next = false;
        for (_, later_depth) in &rows[i + 1..] {
            if *later_depth < *depth {
                break;
            }
            if *later_depth == *depth {
                found_next = true;
                break;
            }
        }
        is_last_at_depth[i] = !found_next;
    }

    let mut parent_has_siblings: Vec<bool> = Vec::new();

    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(i, (node, depth))| {
            while parent_has_siblings.len() > *depth {
                parent_has_siblings.pop();
            }
            while parent_has_siblings.len() < *depth {
                parent_has_siblings.push(false);
            }
            if *depth > 0 && !parent_has_siblings.is_empty() {
                let parent_idx = parent_has_siblings.len() - 1;
                parent_has_siblings[parent_idx] = !is_last_at_depth[i];
            }

            let prefix = tree_prefix(*depth, is_last_at_depth[i], &parent_has_siblings);

            let line = if node.editing {
                Line::from(vec![
                    Span::raw(prefix),
                    Span::raw("• "),
                    Span::styled(
                        format!("{}▌", node.text),
                        Style::default().fg(Color::Yellow),
                    ),
                ])
            } else {
                let bullet = if node.has_sublist() { "▸ " } else { "• " };
                Line::from(vec![
                    Span::raw(prefix),
                    Span::styled(bullet, Style::default().fg(Color::DarkGray)),
                    Span::raw(node.text.clone()),
                ])
            };

            let style = if i == app.cursor {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };

            ListItem::new(line).style(style)
        })
        .collect();

    let title = if app.dirty {
        format!("Outline [+] ({} items)", rows.len())
    } else {
        format!("Outline ({} items)", rows.len())
    };

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, area);
}
