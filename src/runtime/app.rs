use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use anyhow::Result;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Ime, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::ModifiersState;
use winit::window::Window;

use quire::cli::StartupConfig;
use quire::commands::Cmd;
use quire::messages::{DocumentMsg, EditorMsg, Msg, UiMsg};
use quire::model::EditorSession;
use quire::update::update;
use quire::view::fonts::FontBook;
use quire::view::frame::PixelFactory;

use super::input::{key_to_msg, PageStack};
use super::render::Renderer;

/// Pixels scrolled per wheel line
const LINE_SCROLL: f32 = 48.0;

pub struct App {
    startup: Option<StartupConfig>,
    session: Option<EditorSession<PixelFactory>>,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    modifiers: ModifiersState,
    mouse_position: Option<(f64, f64)>,
    scroll_y: f32,
    /// Deferred UI messages from timer threads
    msg_tx: Sender<UiMsg>,
    msg_rx: Receiver<UiMsg>,
}

impl App {
    pub fn new(startup: StartupConfig) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            startup: Some(startup),
            session: None,
            renderer: None,
            window: None,
            context: None,
            modifiers: ModifiersState::empty(),
            mouse_position: None,
            scroll_y: 0.0,
            msg_tx,
            msg_rx,
        }
    }

    /// Create the window, the surface and the editor session
    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let Some(startup) = self.startup.take() else {
            return Ok(());
        };

        let fonts = Rc::new(FontBook::load(&startup.config.fonts)?);
        let factory = PixelFactory::new(Rc::clone(&fonts));
        let session = EditorSession::new(startup.config, startup.document, factory, Box::new(fonts));

        let window_attributes = Window::default_attributes()
            .with_title("Quire")
            .with_inner_size(LogicalSize::new(
                f64::from(session.config.page.width + 2.0 * session.config.page.gap),
                900.0,
            ));
        let window = Rc::new(event_loop.create_window(window_attributes)?);
        window.set_ime_allowed(true);

        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create context: {}", e))?;
        let renderer = Renderer::new(Rc::clone(&window), &context)?;

        tracing::info!(pages = session.page_count(), "session ready");

        self.session = Some(session);
        self.renderer = Some(renderer);
        self.window = Some(window);
        self.context = Some(context);
        Ok(())
    }

    fn dispatch(&mut self, msg: Msg) -> Option<Cmd> {
        let session = self.session.as_mut()?;
        update(session, msg)
    }

    fn page_stack(&self) -> Option<PageStack> {
        let session = self.session.as_ref()?;
        let renderer = self.renderer.as_ref()?;
        Some(PageStack::new(
            &session.config.page,
            renderer.width() as f32,
            self.scroll_y,
        ))
    }

    fn scroll_by(&mut self, delta: f32) -> Option<Cmd> {
        let stack = self.page_stack()?;
        let session = self.session.as_ref()?;
        let window_height = self.renderer.as_ref()?.height() as f32;
        let max_scroll = (stack.total_height(session.page_count()) - window_height).max(0.0);

        let scroll_y = (self.scroll_y + delta).clamp(0.0, max_scroll);
        if scroll_y == self.scroll_y {
            return None;
        }
        self.scroll_y = scroll_y;
        Some(Cmd::Redraw)
    }

    fn handle_event(&mut self, event: &WindowEvent) -> Option<Cmd> {
        match event {
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
                // Re-clamp the scroll offset to the new height
                self.scroll_by(0.0);
                Some(Cmd::Redraw)
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers.state();
                None
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return None;
                }
                let msg = key_to_msg(
                    &event.logical_key,
                    event.text.as_deref(),
                    self.modifiers.control_key(),
                    self.modifiers.super_key(),
                )?;
                self.dispatch(msg)
            }

            WindowEvent::Ime(ime) => match ime {
                Ime::Preedit(text, _) => {
                    self.dispatch(Msg::Document(DocumentMsg::Preedit(text.clone())))
                }
                Ime::Commit(text) => {
                    self.dispatch(Msg::Document(DocumentMsg::CompositionCommit(text.clone())))
                }
                Ime::Disabled => self.dispatch(Msg::Document(DocumentMsg::Preedit(String::new()))),
                Ime::Enabled => None,
            },

            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_position = Some((position.x, position.y));
                None
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                let (x, y) = self.mouse_position?;
                let stack = self.page_stack()?;
                let page_count = self.session.as_ref()?.page_count();
                let (page_index, x, y) = stack.to_page(x as f32, y as f32, page_count);
                self.dispatch(Msg::Editor(EditorMsg::PointerDown { page_index, x, y }))
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let dy = match delta {
                    MouseScrollDelta::LineDelta(_, lines) => -lines * LINE_SCROLL,
                    MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
                };
                self.scroll_by(dy)
            }

            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    tracing::error!("Render error: {:#}", e);
                }
                None
            }

            _ => None,
        }
    }

    fn render(&mut self) -> Result<()> {
        let Some(stack) = self.page_stack() else {
            return Ok(());
        };
        if let (Some(renderer), Some(session)) = (&mut self.renderer, &self.session) {
            renderer.render(session, stack)?;
        }
        Ok(())
    }

    fn process_cmd(&self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => {}
            Cmd::ScheduleBlink {
                generation,
                delay_ms,
            } => {
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    std::thread::sleep(Duration::from_millis(delay_ms));
                    let _ = tx.send(UiMsg::BlinkCursor { generation });
                });
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }

    fn process_async_messages(&mut self) -> bool {
        let mut needs_redraw = false;
        while let Ok(msg) = self.msg_rx.try_recv() {
            if let Some(cmd) = self.dispatch(Msg::Ui(msg)) {
                if cmd.needs_redraw() {
                    needs_redraw = true;
                }
                self.process_cmd(cmd);
            }
        }
        needs_redraw
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init(event_loop) {
                tracing::error!("Failed to start editor: {:#}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let should_exit = matches!(event, WindowEvent::CloseRequested);
        let should_redraw = if let Some(window) = &self.window {
            if window_id == window.id() && !should_exit {
                if let Some(cmd) = self.handle_event(&event) {
                    let needs_redraw = cmd.needs_redraw();
                    self.process_cmd(cmd);
                    needs_redraw
                } else {
                    false
                }
            } else {
                false
            }
        } else {
            false
        };

        if should_exit {
            event_loop.exit();
        } else if should_redraw {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Blink ticks arrive over the channel, so a short wait is enough
        event_loop.set_control_flow(ControlFlow::wait_duration(Duration::from_millis(16)));

        if self.process_async_messages() {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }
}
