use std::collections::HashMap;
use std::rc::Rc;

use anyhow::Result;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use tabdock::cli::StartupConfig;
use tabdock::commands::Cmd;
use tabdock::messages::{AppMsg, FloatingMsg, Msg};
use tabdock::model::DockModel;
use tabdock::panel::Icon;
use tabdock::update::update;
use tabdock::view::geometry::Size;
use tabdock::view::Renderer;

use super::host::{self, PanelContent};
use super::mouse::PointerTracker;

const INITIAL_SIZE: (u32, u32) = (800, 600);
const TAB_ICON_SIZE: u32 = 16;

/// A native window with its own surface
struct HostedWindow {
    window: Rc<Window>,
    renderer: Renderer,
    pointer: PointerTracker,
}

impl HostedWindow {
    fn create(event_loop: &ActiveEventLoop, attributes: winit::window::WindowAttributes) -> Result<Self> {
        let window = Rc::new(event_loop.create_window(attributes)?);
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create context: {}", e))?;
        let renderer = Renderer::new(Rc::clone(&window), &context)?;

        let mut pointer = PointerTracker::default();
        if let Ok(origin) = window.inner_position() {
            pointer.set_origin(origin);
        }

        Ok(Self {
            window,
            renderer,
            pointer,
        })
    }
}

pub struct App {
    model: DockModel<PanelContent>,
    window_icon: Option<Icon>,
    main: Option<HostedWindow>,
    /// Floating windows keyed by panel name
    floating: HashMap<String, HostedWindow>,
    /// Reverse lookup from window id to panel name
    floating_ids: HashMap<WindowId, String>,
}

impl App {
    pub fn new(startup: StartupConfig) -> Self {
        let window_icon = startup
            .dock
            .window_icon
            .as_deref()
            .and_then(|path| match Icon::from_path(path) {
                Ok(icon) => Some(icon),
                Err(e) => {
                    tracing::warn!("Failed to load window icon {}: {}", path.display(), e);
                    None
                }
            });

        let size = Size::new(INITIAL_SIZE.0 as f32, INITIAL_SIZE.1 as f32);
        let mut model = DockModel::new(startup.dock, size);
        model.set_default_icon(window_icon.clone());

        for name in &startup.panels {
            let content = PanelContent::for_name(name);
            // the first panel shows the window icon, the rest their own color
            let icon = match (&window_icon, model.registry.is_empty()) {
                (Some(icon), true) => icon.clone(),
                _ => Icon::solid(TAB_ICON_SIZE, TAB_ICON_SIZE, content.color | 0x00404040),
            };
            if let Err(e) = model.insert_panel(name.as_str(), Some(icon), content, true, None) {
                tracing::warn!(%name, "Skipping panel: {e}");
            }
        }

        Self {
            model,
            window_icon,
            main: None,
            floating: HashMap::new(),
            floating_ids: HashMap::new(),
        }
    }

    fn winit_icon(icon: Option<&Icon>) -> Option<winit::window::Icon> {
        let icon = icon?;
        winit::window::Icon::from_rgba(icon.rgba().to_vec(), icon.width(), icon.height())
            .map_err(|e| tracing::warn!("Unusable window icon: {e}"))
            .ok()
    }

    fn dispatch(&mut self, event_loop: &ActiveEventLoop, msg: Msg) {
        if let Some(cmd) = update(&mut self.model, msg) {
            self.process_cmd(event_loop, cmd);
        }
    }

    fn process_cmd(&mut self, event_loop: &ActiveEventLoop, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => self.request_redraw_all(),
            Cmd::OpenFloatingWindow { name } => {
                if let Err(e) = self.open_floating(event_loop, &name) {
                    tracing::error!(%name, "Failed to open floating window: {e:#}");
                }
            }
            Cmd::CloseFloatingWindow { name } => {
                if let Some(hosted) = self.floating.remove(&name) {
                    self.floating_ids.remove(&hosted.window.id());
                }
            }
            Cmd::Notify(event) => {
                if let Some(cmd) = host::handle_event(&mut self.model, event) {
                    self.process_cmd(event_loop, cmd);
                }
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(event_loop, cmd);
                }
            }
            Cmd::Quit => event_loop.exit(),
        }
    }

    fn open_floating(&mut self, event_loop: &ActiveEventLoop, name: &str) -> Result<()> {
        let panel = self
            .model
            .floating_window(name)
            .ok_or_else(|| anyhow::anyhow!("no floating panel named {name}"))?;

        let attributes = Window::default_attributes()
            .with_title(name)
            .with_position(PhysicalPosition::new(
                panel.position.x as i32,
                panel.position.y as i32,
            ))
            .with_inner_size(PhysicalSize::new(
                panel.size.width.max(1.0) as u32,
                panel.size.height.max(1.0) as u32,
            ))
            .with_window_icon(Self::winit_icon(panel.icon().or(self.window_icon.as_ref())));

        let hosted = HostedWindow::create(event_loop, attributes)?;
        self.floating_ids.insert(hosted.window.id(), name.to_string());
        self.floating.insert(name.to_string(), hosted);
        Ok(())
    }

    fn request_redraw_all(&self) {
        if let Some(main) = &self.main {
            main.window.request_redraw();
        }
        for hosted in self.floating.values() {
            hosted.window.request_redraw();
        }
    }

    fn render_main(&mut self) -> Result<()> {
        if let Some(main) = &mut self.main {
            main.renderer.render_container(&self.model, |c| c.color)?;
        }
        Ok(())
    }

    fn render_floating(&mut self, name: &str) -> Result<()> {
        let (Some(hosted), Some(panel)) = (
            self.floating.get_mut(name),
            self.model.floating_window(name),
        ) else {
            return Ok(());
        };
        let color = self
            .model
            .content(name)
            .map(|c| c.color)
            .unwrap_or(hosted.renderer.palette().strip_background);
        hosted.renderer.render_floating(panel, color)
    }

    fn main_window_event(&mut self, event_loop: &ActiveEventLoop, event: WindowEvent) {
        let Some(main) = &mut self.main else {
            return;
        };

        match &event {
            WindowEvent::CloseRequested => {
                return self.dispatch(event_loop, Msg::App(AppMsg::Shutdown));
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render_main() {
                    tracing::error!("Render failed: {e:#}");
                }
                return;
            }
            WindowEvent::Resized(size) => {
                let msg = Msg::App(AppMsg::Resize(size.width, size.height));
                return self.dispatch(event_loop, msg);
            }
            WindowEvent::Moved(_) => {
                if let Ok(origin) = main.window.inner_position() {
                    main.pointer.set_origin(origin);
                    let msg = Msg::App(AppMsg::Moved(main.pointer.origin));
                    return self.dispatch(event_loop, msg);
                }
                return;
            }
            _ => {}
        }

        if let Some(msg) = main.pointer.strip_msg(&event) {
            self.dispatch(event_loop, Msg::Strip(msg));
        }
    }

    fn floating_window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        name: String,
        event: WindowEvent,
    ) {
        let Some(hosted) = self.floating.get_mut(&name) else {
            return;
        };

        let mut drag_started = false;
        match &event {
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render_floating(&name) {
                    tracing::error!(%name, "Render failed: {e:#}");
                }
                return;
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                // the whole body acts as a title bar
                match hosted.window.drag_window() {
                    Ok(()) => drag_started = true,
                    Err(e) => tracing::debug!(%name, "drag_window unavailable: {e}"),
                }
            }
            WindowEvent::Moved(_) => {
                if let Ok(origin) = hosted.window.inner_position() {
                    hosted.pointer.set_origin(origin);
                }
            }
            _ => {}
        }

        let Some(platform_event) = hosted.pointer.platform_event(&event) else {
            return;
        };
        let cursor = hosted.pointer.screen_pos();

        if drag_started {
            let msg = Msg::Floating(FloatingMsg::DragStarted { name: name.clone() });
            self.dispatch(event_loop, msg);
        }

        let msg = Msg::Floating(FloatingMsg::Platform {
            name,
            event: platform_event,
            cursor,
        });
        self.dispatch(event_loop, msg);
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.main.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title("tabdock")
            .with_inner_size(LogicalSize::new(INITIAL_SIZE.0, INITIAL_SIZE.1))
            .with_window_icon(Self::winit_icon(self.window_icon.as_ref()));

        match HostedWindow::create(event_loop, attributes) {
            Ok(main) => {
                let size = main.window.inner_size();
                let origin = main.pointer.origin;
                self.main = Some(main);
                self.dispatch(event_loop, Msg::App(AppMsg::Resize(size.width, size.height)));
                self.dispatch(event_loop, Msg::App(AppMsg::Moved(origin)));
            }
            Err(e) => {
                tracing::error!("Failed to create main window: {e:#}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        if self.main.as_ref().is_some_and(|m| m.window.id() == window_id) {
            self.main_window_event(event_loop, event);
        } else if let Some(name) = self.floating_ids.get(&window_id).cloned() {
            self.floating_window_event(event_loop, name, event);
        }
    }
}
