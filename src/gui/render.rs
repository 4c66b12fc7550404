//! Menu renderer
//!
//! Draws the menu service's stage with SDL2 primitives and the bitmap font:
//! a darkening overlay (or black screen), one box per open window, focus
//! highlighting, greyed-out placeholders, slot thumbnails, and the current
//! transient message.

use super::widget::{Stage, Widget, Window as MenuWindow};
use crate::menu::MenuService;
use crate::text::{GLYPH_HEIGHT, draw_centered_text, text_width};
use sdl2::image::LoadTexture;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use std::collections::HashMap;
use std::path::PathBuf;

/// Configuration for menu appearance
#[derive(Debug, Clone)]
pub struct MenuStyle {
    /// Background color
    pub background_color: Color,

    /// Border color
    pub border_color: Color,

    /// Border thickness (draws double border if > 1)
    pub border_thickness: u32,

    /// Overlay darkness (0-255, higher = darker)
    pub overlay_alpha: u8,

    /// Title text color
    pub title_color: Color,

    /// Normal item text color
    pub item_color: Color,

    /// Focused item text color
    pub selected_item_color: Color,

    /// Empty-slot placeholder text color
    pub disabled_item_color: Color,

    /// Focus highlight color
    pub highlight_color: Color,

    /// Text scale factor
    pub text_scale: u32,

    /// Height of one widget row in pixels
    pub row_height: u32,

    /// Inner padding of a window in pixels
    pub padding: u32,
}

impl Default for MenuStyle {
    fn default() -> Self {
        MenuStyle {
            background_color: Color::RGB(30, 30, 40),
            border_color: Color::RGB(100, 100, 120),
            border_thickness: 2,
            overlay_alpha: 180,
            title_color: Color::RGB(220, 220, 240),
            item_color: Color::RGB(160, 160, 170),
            selected_item_color: Color::RGB(255, 255, 255),
            disabled_item_color: Color::RGB(90, 90, 100),
            highlight_color: Color::RGB(80, 100, 140),
            text_scale: 1,
            row_height: 22,
            padding: 12,
        }
    }
}

/// Textures for the thumbnails currently held by the stage
///
/// Textures are dropped as soon as the stage releases the image.
pub struct ThumbnailCache<'a> {
    creator: &'a TextureCreator<WindowContext>,
    textures: HashMap<PathBuf, Option<Texture<'a>>>,
}

impl<'a> ThumbnailCache<'a> {
    pub fn new(creator: &'a TextureCreator<WindowContext>) -> Self {
        ThumbnailCache {
            creator,
            textures: HashMap::new(),
        }
    }

    /// Loads new thumbnails and drops released ones
    pub fn sync(&mut self, stage: &Stage) {
        let wanted: Vec<PathBuf> = stage.images().map(|p| p.to_path_buf()).collect();
        self.textures.retain(|path, _| wanted.contains(path));

        for path in wanted {
            let creator = self.creator;
            self.textures.entry(path).or_insert_with_key(|path| match creator.load_texture(path) {
                Ok(texture) => Some(texture),
                Err(e) => {
                    log::warn!("failed to load thumbnail {}: {}", path.display(), e);
                    None
                }
            });
        }
    }

    fn get(&self, path: &std::path::Path) -> Option<&Texture<'a>> {
        self.textures.get(path).and_then(Option::as_ref)
    }
}

/// Renders the whole menu layer
pub fn render_menu(
    canvas: &mut Canvas<Window>,
    menu: &MenuService,
    style: &MenuStyle,
    thumbnails: &ThumbnailCache<'_>,
) -> Result<(), String> {
    let stage = menu.stage();
    let flags = menu.flags();

    if flags.clear_the_screen {
        canvas.set_draw_color(Color::RGB(0, 0, 0));
        canvas.fill_rect(None)?;
    } else if !stage.is_empty() {
        // Semi-transparent overlay darkens the frozen world
        canvas.set_blend_mode(BlendMode::Blend);
        canvas.set_draw_color(Color::RGBA(0, 0, 0, style.overlay_alpha));
        canvas.fill_rect(None)?;
        canvas.set_blend_mode(BlendMode::None);
    }

    for (depth, window) in stage.windows().iter().enumerate() {
        render_window(canvas, window, depth as i32, stage, style, thumbnails)?;
    }

    if let Some(message) = menu.current_message() {
        render_message(canvas, message, style)?;
    }

    Ok(())
}

fn window_rect(canvas: &Canvas<Window>, window: &MenuWindow, depth: i32, style: &MenuStyle) -> Rect {
    let (screen_width, screen_height) = canvas.logical_size();
    let scale = style.text_scale;

    let (width, height) = window.size.unwrap_or_else(|| {
        let widest_row = window
            .rows
            .iter()
            .map(|row| row.iter().map(|w| text_width(w.text(), scale) + style.padding * 2).sum::<u32>())
            .max()
            .unwrap_or(0);
        let title = text_width(&window.title, scale * 2);
        let width = widest_row.max(title) + style.padding * 2;
        let height = style.padding * 3 + GLYPH_HEIGHT * scale * 2 + window.rows.len() as u32 * style.row_height;
        (width, height)
    });
    let width = width.min(screen_width.saturating_sub(8));
    let height = height.min(screen_height.saturating_sub(8));

    let (x, y) = if window.centered {
        ((screen_width - width) as i32 / 2, (screen_height - height) as i32 / 2)
    } else {
        (16 + depth * 12, 16 + depth * 12)
    };
    Rect::new(x, y, width, height)
}

fn render_window(
    canvas: &mut Canvas<Window>,
    window: &MenuWindow,
    depth: i32,
    stage: &Stage,
    style: &MenuStyle,
    thumbnails: &ThumbnailCache<'_>,
) -> Result<(), String> {
    let rect = window_rect(canvas, window, depth, style);
    let scale = style.text_scale;

    canvas.set_draw_color(style.background_color);
    canvas.fill_rect(rect)?;

    // Double border
    canvas.set_draw_color(style.border_color);
    canvas.draw_rect(rect)?;
    if style.border_thickness > 1 {
        canvas.draw_rect(Rect::new(rect.x() + 2, rect.y() + 2, rect.width() - 4, rect.height() - 4))?;
    }

    let center_x = rect.x() + rect.width() as i32 / 2;
    draw_centered_text(
        canvas,
        &window.title,
        center_x,
        rect.y() + style.padding as i32,
        rect.width(),
        style.title_color,
        scale * 2,
    )?;

    let inner_width = rect.width().saturating_sub(style.padding * 2);
    let mut row_y = rect.y() + (style.padding * 2 + GLYPH_HEIGHT * scale * 2) as i32;

    for row in &window.rows {
        let columns: u32 = row.iter().map(|w| u32::from(w.colspan)).sum::<u32>().max(1);
        let mut cell_x = rect.x() + style.padding as i32;

        for widget in row {
            let cell_width = inner_width * u32::from(widget.colspan) / columns;
            let cell = Rect::new(cell_x, row_y, cell_width.max(1), style.row_height - 4);
            render_widget(canvas, widget, cell, stage.focus() == Some(widget.id), style, thumbnails)?;
            cell_x += cell_width as i32;
        }

        row_y += style.row_height as i32;
        if row_y >= rect.bottom() {
            break;
        }
    }

    Ok(())
}

fn render_widget(
    canvas: &mut Canvas<Window>,
    widget: &Widget,
    cell: Rect,
    focused: bool,
    style: &MenuStyle,
    thumbnails: &ThumbnailCache<'_>,
) -> Result<(), String> {
    if focused {
        canvas.set_draw_color(style.highlight_color);
        canvas.fill_rect(Rect::new(cell.x() + 2, cell.y(), cell.width().saturating_sub(4).max(1), cell.height()))?;
    }

    let color = if widget.is_disabled() {
        style.disabled_item_color
    } else if focused {
        style.selected_item_color
    } else {
        style.item_color
    };

    let mut text_left = cell.x() + 4;
    if let Some(texture) = widget.thumbnail().and_then(|path| thumbnails.get(path)) {
        let side = cell.height().saturating_sub(2).max(1);
        canvas.copy(texture, None, Rect::new(text_left, cell.y() + 1, side * 4 / 3, side))?;
        text_left += (side * 4 / 3) as i32 + 4;
    }

    let text_area = (cell.right() - text_left).max(1) as u32;
    let text_y = cell.y() + (cell.height() as i32 - (GLYPH_HEIGHT * style.text_scale) as i32) / 2;
    draw_centered_text(
        canvas,
        widget.text(),
        text_left + text_area as i32 / 2,
        text_y,
        text_area,
        color,
        style.text_scale,
    )
}

fn render_message(canvas: &mut Canvas<Window>, message: &str, style: &MenuStyle) -> Result<(), String> {
    let (screen_width, screen_height) = canvas.logical_size();
    let scale = style.text_scale;
    let width = (text_width(message, scale) + style.padding * 2).min(screen_width.saturating_sub(8));
    let height = GLYPH_HEIGHT * scale + style.padding * 2;
    let rect = Rect::new(
        (screen_width - width) as i32 / 2,
        (screen_height - height - 16) as i32,
        width,
        height,
    );

    canvas.set_draw_color(style.background_color);
    canvas.fill_rect(rect)?;
    canvas.set_draw_color(style.highlight_color);
    canvas.draw_rect(rect)?;

    draw_centered_text(
        canvas,
        message,
        rect.x() + width as i32 / 2,
        rect.y() + style.padding as i32,
        width,
        style.selected_item_color,
        scale,
    )
}
