use crate::buffer::{Buffer, Cell};
use crate::id::RowId;
use crate::layout::TableLayout;
use crate::page::Document;
use crate::row::Stripe;
use crate::text::{char_width, display_width, truncate_to_width};
use crate::types::{Rgb, TextStyle, Theme};

/// Render the page header and the laid-out rows into `buf`.
///
/// `cursor` optionally highlights one row (viewer selection); pass `None`
/// for plain output.
pub fn render_to_buffer(
    doc: &Document,
    layout: &TableLayout,
    buf: &mut Buffer,
    theme: &Theme,
    cursor: Option<&RowId>,
) {
    buf.fill(Cell::new(' ').with_fg(theme.entry).with_bg(theme.background));

    draw_header(doc, buf, theme);

    let width = buf.width();
    // The description column takes the right two fifths on screens wide
    // enough to split.
    let desc_width = if width >= 40 { width * 2 / 5 } else { 0 };
    let desc_x = width - desc_width;

    for line in layout.lines() {
        let Some(row) = doc.table.get(&line.id) else {
            continue;
        };

        let bg = if cursor == Some(&row.id) {
            theme.cursor
        } else {
            match row.stripe {
                Stripe::Even => theme.background,
                Stripe::Odd => theme.stripe,
            }
        };

        for x in 0..width {
            buf.set(x, line.y, Cell::new(' ').with_fg(theme.entry).with_bg(bg));
        }

        if let (Some(indicator), Some(control)) = (row.control, line.control.as_ref()) {
            buf.set(
                control.x,
                control.y,
                Cell::new(indicator.glyph())
                    .with_fg(theme.control)
                    .with_bg(bg)
                    .with_style(TextStyle::new().bold()),
            );
        }

        // Entries line up two columns past the control glyph, control or not.
        let entry_x = (2 * row.depth()) as u16 + 2;
        let entry_max = desc_x.saturating_sub(entry_x + 1);
        let entry = truncate_to_width(&row.entry, entry_max as usize);
        draw_text(
            buf,
            entry_x,
            line.y,
            &entry,
            theme.entry,
            bg,
            TextStyle::new().bold(),
        );

        if desc_width > 0 && !row.desc.is_empty() {
            let desc = truncate_to_width(&row.desc, (desc_width - 1) as usize);
            draw_text(
                buf,
                desc_x,
                line.y,
                &desc,
                theme.desc,
                bg,
                TextStyle::new().dim(),
            );
        }
    }
}

fn draw_header(doc: &Document, buf: &mut Buffer, theme: &Theme) {
    let width = buf.width() as usize;
    let info = &doc.info;

    let project = truncate_to_width(&info.project, width);
    draw_text(
        buf,
        0,
        0,
        &project,
        theme.header,
        theme.background,
        TextStyle::new().bold(),
    );
    if !info.brief.is_empty() {
        let brief_x = display_width(&project) + 2;
        if brief_x < width {
            let brief = truncate_to_width(&info.brief, width - brief_x);
            draw_text(
                buf,
                brief_x as u16,
                0,
                &brief,
                theme.desc,
                theme.background,
                TextStyle::new().dim(),
            );
        }
    }

    let title = truncate_to_width(&info.title, width);
    draw_text(
        buf,
        0,
        1,
        &title,
        theme.header,
        theme.background,
        TextStyle::new().underline(),
    );
}

fn draw_text(buf: &mut Buffer, x: u16, y: u16, text: &str, fg: Rgb, bg: Rgb, style: TextStyle) {
    let mut x = x;
    for ch in text.chars() {
        let w = char_width(ch);
        if w == 0 {
            continue;
        }
        if x as usize + w > buf.width() as usize {
            break;
        }
        buf.set(x, y, Cell::new(ch).with_fg(fg).with_bg(bg).with_style(style));
        // A wide glyph owns the following cell too.
        for i in 1..w {
            buf.set(
                x + i as u16,
                y,
                Cell::new(' ').with_fg(fg).with_bg(bg).with_style(style),
            );
        }
        x += w as u16;
    }
}
