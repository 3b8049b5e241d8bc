//! Window renderer - composites page buffers into the softbuffer surface

use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::Result;
use softbuffer::Surface;
use winit::window::Window;

use quire::model::{CursorState, EditorSession};
use quire::view::frame::{PixelFactory, PixelSurface};
use quire::view::surface::Page;
use quire::EditorConfig;

use super::input::PageStack;

/// Color of the desk the pages sit on
const BACKDROP: u32 = 0xFFD6D6D6;

pub struct Renderer {
    surface: Surface<Rc<Window>, Rc<Window>>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(window: Rc<Window>, context: &softbuffer::Context<Rc<Window>>) -> Result<Self> {
        let size = window.inner_size();
        let surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;

        Ok(Self {
            surface,
            width: size.width,
            height: size.height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn render(&mut self, session: &EditorSession<PixelFactory>, stack: PageStack) -> Result<()> {
        let (Some(width), Some(height)) = (NonZeroU32::new(self.width), NonZeroU32::new(self.height))
        else {
            // Minimized
            return Ok(());
        };
        self.surface
            .resize(width, height)
            .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get surface buffer: {}", e))?;

        compose(
            &mut buffer,
            self.width as usize,
            self.height as usize,
            &session.pages,
            &session.cursor,
            &session.config,
            stack,
        );

        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;
        Ok(())
    }
}

/// Paint the backdrop, every visible page and the cursor bar into `buffer`
pub fn compose(
    buffer: &mut [u32],
    width: usize,
    height: usize,
    pages: &[Page<PixelSurface>],
    cursor: &CursorState,
    config: &EditorConfig,
    stack: PageStack,
) {
    buffer.fill(BACKDROP);

    let left = stack.page_left().round() as isize;
    for page in pages {
        let top = stack.page_top(page.index).round() as isize;
        blit(buffer, width, height, &page.surface, left, top);
    }

    if !cursor.is_visible() {
        return;
    }
    let Some(geometry) = cursor.geometry else {
        return;
    };

    let color = config.cursor.color.to_argb_u32();
    let x0 = left + geometry.x.round() as isize;
    let y0 = stack.page_top(geometry.page_index).round() as isize + geometry.y.round() as isize;
    let bar_width = config.cursor.width.max(1.0).round() as isize;
    let bar_height = geometry.height.round() as isize;

    for y in y0.max(0)..(y0 + bar_height).min(height as isize) {
        for x in x0.max(0)..(x0 + bar_width).min(width as isize) {
            buffer[y as usize * width + x as usize] = color;
        }
    }
}

fn blit(
    buffer: &mut [u32],
    width: usize,
    height: usize,
    surface: &PixelSurface,
    left: isize,
    top: isize,
) {
    let src = surface.pixels();
    let src_width = surface.width();

    let y_start = top.max(0);
    let y_end = (top + surface.height() as isize).min(height as isize);
    let x_start = left.max(0);
    let x_end = (left + src_width as isize).min(width as isize);
    if x_start >= x_end {
        return;
    }

    for y in y_start..y_end {
        let src_row = (y - top) as usize * src_width;
        let src_x = (x_start - left) as usize;
        let len = (x_end - x_start) as usize;
        let dst = y as usize * width + x_start as usize;
        buffer[dst..dst + len].copy_from_slice(&src[src_row + src_x..src_row + src_x + len]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quire::model::{Color, CursorGeometry};

    fn small_config() -> EditorConfig {
        let mut config = EditorConfig::default();
        config.page.width = 4.0;
        config.page.height = 4.0;
        config.page.gap = 2.0;
        config
    }

    #[test]
    fn test_compose_places_pages_with_gap() {
        let config = small_config();
        let pages = vec![
            Page::new(0, PixelSurface::new(4, 4, Color::WHITE)),
            Page::new(1, PixelSurface::new(4, 4, Color::WHITE)),
        ];
        let stack = PageStack::new(&config.page, 8.0, 0.0);
        let mut buffer = vec![0u32; 8 * 14];

        compose(&mut buffer, 8, 14, &pages, &CursorState::new(), &config, stack);

        // Gap rows keep the backdrop
        assert_eq!(buffer[0], BACKDROP);
        assert_eq!(buffer[2 * 8 + 2], 0xFFFFFFFF);
        assert_eq!(buffer[2 * 8], BACKDROP);
        assert_eq!(buffer[6 * 8 + 2], BACKDROP);
        assert_eq!(buffer[8 * 8 + 4], 0xFFFFFFFF);
        assert_eq!(buffer[11 * 8 + 4], 0xFFFFFFFF);
        assert_eq!(buffer[12 * 8 + 4], BACKDROP);
    }

    #[test]
    fn test_compose_draws_visible_cursor() {
        let config = small_config();
        let pages = vec![Page::new(0, PixelSurface::new(4, 4, Color::WHITE))];
        let stack = PageStack::new(&config.page, 4.0, 0.0);
        let mut cursor = CursorState::new();
        cursor.geometry = Some(CursorGeometry {
            page_index: 0,
            x: 1.0,
            y: 0.0,
            height: 3.0,
        });
        cursor.blink.restart();

        let mut buffer = vec![0u32; 4 * 8];
        compose(&mut buffer, 4, 8, &pages, &cursor, &config, stack);
        let bar = config.cursor.color.to_argb_u32();
        assert_eq!(buffer[2 * 4 + 1], bar);
        assert_eq!(buffer[4 * 4 + 1], bar);
        assert_eq!(buffer[5 * 4 + 1], 0xFFFFFFFF);

        // Hidden half of the blink cycle
        let generation = cursor.blink.generation();
        cursor.blink.tick(generation);
        compose(&mut buffer, 4, 8, &pages, &cursor, &config, stack);
        assert_eq!(buffer[2 * 4 + 1], 0xFFFFFFFF);
    }

    #[test]
    fn test_compose_clips_scrolled_pages() {
        let config = small_config();
        let pages = vec![Page::new(0, PixelSurface::new(4, 4, Color::WHITE))];
        let stack = PageStack::new(&config.page, 4.0, 5.0);
        let mut buffer = vec![0u32; 4 * 4];
        compose(&mut buffer, 4, 4, &pages, &CursorState::new(), &config, stack);
        // Page spans window rows -3..1
        assert_eq!(buffer[0], 0xFFFFFFFF);
        assert_eq!(buffer[4], BACKDROP);
    }
}
