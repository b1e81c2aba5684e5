//! View module - software rendering of containers and floating windows
//!
//! Drawing goes to a persistent back buffer through `Frame`; the renderer
//! copies it to the softbuffer surface on present. The drawing functions
//! take a `Frame` directly so they can run headless.

pub mod frame;
pub mod geometry;

pub use frame::Frame;
pub use geometry::{ContainerLayout, Point, Rect, Size};
pub use hit_test::{hit_test_container, HitTarget};

use anyhow::Result;
use softbuffer::Surface;
use std::num::NonZeroU32;
use std::rc::Rc;
use winit::window::Window;

use crate::floating::FloatingWindow;
use crate::model::DockModel;
use crate::strip::GestureState;

/// Colors used by the renderer, all ARGB
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub strip_background: u32,
    pub strip_border: u32,
    pub tab_active: u32,
    pub tab_inactive: u32,
    pub tab_border: u32,
    pub close_button: u32,
    pub drag_ghost: u32,
    pub drop_marker: u32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            strip_background: 0xFF252526,
            strip_border: 0xFF3C3C3C,
            tab_active: 0xFF1E1E1E,
            tab_inactive: 0xFF2D2D2D,
            tab_border: 0xFF3C3C3C,
            close_button: 0xFFC5C5C5,
            drag_ghost: 0x600078D4,
            drop_marker: 0xFF0078D4,
        }
    }
}

const ICON_PADDING: f32 = 6.0;
const DROP_MARKER_WIDTH: f32 = 2.0;

/// Draw a container: strip, tabs, drag feedback and the active panel's body
///
/// `content_color` paints the content area for the active panel; with no
/// active panel the content area keeps the strip background.
pub fn draw_container<C>(
    frame: &mut Frame,
    model: &DockModel<C>,
    palette: &Palette,
    content_color: impl Fn(&C) -> u32,
) {
    let layout = &model.layout;
    let tabs = model.registry.tabs();
    let count = tabs.len();

    frame.clear(palette.strip_background);

    if let Some(content) = model.active_content() {
        frame.fill_rect(layout.content_rect(), content_color(content));
    }

    let strip = layout.strip_rect();
    frame.fill_rect(
        Rect::new(strip.x, strip.y + strip.height - 1.0, strip.width, 1.0),
        palette.strip_border,
    );

    for tab in tabs {
        let rect = layout.tab_rect(tab.index, count);
        let fill = if model.active_index == Some(tab.index) {
            palette.tab_active
        } else {
            palette.tab_inactive
        };
        frame.draw_bordered_rect(rect, fill, palette.tab_border);

        if let Some(icon) = &tab.icon {
            let side = rect.height - ICON_PADDING * 2.0;
            frame.blit_icon(
                icon,
                Rect::new(rect.x + ICON_PADDING, rect.y + ICON_PADDING, side, side),
            );
        }

        if tab.closable {
            let close = layout.close_button_rect(tab.index, count);
            frame.draw_cross(close, palette.close_button);
        }
    }

    if let GestureState::Dragging(session) = model.strip.state() {
        if let Some(dragged) = model.registry.index_of(&session.dragged) {
            draw_drag_feedback(frame, layout, count, dragged, session.drop_pos, palette);
        }
    }
}

/// Highlight the dragged tab and mark where a release would drop it
fn draw_drag_feedback(
    frame: &mut Frame,
    layout: &ContainerLayout,
    count: usize,
    dragged: usize,
    pos: Point,
    palette: &Palette,
) {
    if dragged < count {
        frame.fill_rect_blended(layout.tab_rect(dragged, count), palette.drag_ghost);
    }

    if !layout.strip_rect().contains_point(pos) {
        return;
    }
    let target = layout
        .tab_at(pos, count)
        .unwrap_or(count.saturating_sub(1));
    let rect = layout.tab_rect(target, count);
    let marker_x = if target > dragged {
        rect.x + rect.width - DROP_MARKER_WIDTH
    } else {
        rect.x
    };
    frame.fill_rect(
        Rect::new(marker_x, rect.y, DROP_MARKER_WIDTH, rect.height),
        palette.drop_marker,
    );
}

/// Draw a floating window's body with its icon in the top-left corner
pub fn draw_floating(frame: &mut Frame, window: &FloatingWindow, body_color: u32) {
    frame.clear(body_color);
    if let Some(icon) = window.icon() {
        frame.blit_icon(icon, Rect::new(ICON_PADDING, ICON_PADDING, 16.0, 16.0));
    }
}

/// Software renderer bound to one window
pub struct Renderer {
    surface: Surface<Rc<Window>, Rc<Window>>,
    /// Persistent back buffer.
    /// Softbuffer doesn't guarantee buffer contents are preserved between frames,
    /// so we maintain our own buffer and copy to the surface on present.
    back_buffer: Vec<u32>,
    width: u32,
    height: u32,
    palette: Palette,
}

impl Renderer {
    pub fn new(window: Rc<Window>, context: &softbuffer::Context<Rc<Window>>) -> Result<Self> {
        let size = window.inner_size();
        let (width, height) = (size.width.max(1), size.height.max(1));

        let mut surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;
        surface
            .resize(non_zero(width), non_zero(height))
            .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;

        Ok(Self {
            surface,
            back_buffer: vec![0; (width as usize) * (height as usize)],
            width,
            height,
            palette: Palette::default(),
        })
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    fn resize_if_needed(&mut self, width: u32, height: u32) -> Result<()> {
        let (width, height) = (width.max(1), height.max(1));
        if self.width == width && self.height == height {
            return Ok(());
        }
        self.width = width;
        self.height = height;
        self.back_buffer
            .resize((width as usize) * (height as usize), 0);
        self.surface
            .resize(non_zero(width), non_zero(height))
            .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))
    }

    /// Render a container at its current layout size and present it
    pub fn render_container<C>(
        &mut self,
        model: &DockModel<C>,
        content_color: impl Fn(&C) -> u32,
    ) -> Result<()> {
        let size = model.layout.size;
        self.resize_if_needed(size.width as u32, size.height as u32)?;
        let palette = self.palette;
        let mut frame = Frame::new(
            &mut self.back_buffer,
            self.width as usize,
            self.height as usize,
        );
        draw_container(&mut frame, model, &palette, content_color);
        self.present()
    }

    /// Render a floating window at its current size and present it
    pub fn render_floating(&mut self, window: &FloatingWindow, body_color: u32) -> Result<()> {
        self.resize_if_needed(window.size.width as u32, window.size.height as u32)?;
        let mut frame = Frame::new(
            &mut self.back_buffer,
            self.width as usize,
            self.height as usize,
        );
        draw_floating(&mut frame, window, body_color);
        self.present()
    }

    fn present(&mut self) -> Result<()> {
        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get surface buffer: {}", e))?;
        buffer.copy_from_slice(&self.back_buffer);
        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))
    }
}

fn non_zero(value: u32) -> NonZeroU32 {
    NonZeroU32::new(value).unwrap_or(NonZeroU32::MIN)
}
