use std::path::PathBuf;

use anyhow::{anyhow, Result};
use ratatui::backend::Backend;
use ratatui::crossterm::event::Event;
use ratatui::Terminal;

use crate::buffer::Buffer;
use crate::config::{Config, ConfigManager};
use crate::dispatch::Flow;
use crate::extensions::{builtin_extensions, EditorOps, Extension, Registry};
use crate::input::EventSource;
use crate::viewport::Viewport;

/// The editor session: one buffer, its viewport, the extension bindings,
/// and the status row state.
pub struct App {
    /// Whether the main loop keeps running
    pub running: bool,

    /// The single open document
    pub buffer: Buffer,

    /// Scroll state for the visible window
    pub viewport: Viewport,

    /// Key bindings contributed by extensions
    pub registry: Registry,

    /// Message shown in the status row
    pub status_message: String,

    /// Active prompt text, if a blocking prompt is open
    pub prompt_line: Option<String>,

    /// Terminal dimensions, refreshed on every draw and resize; never
    /// treated as authoritative between frames
    pub screen_size: (u16, u16),

    /// Directory where user config lives
    pub user_dir: PathBuf,

    /// User configuration
    pub config: Config,
}

impl App {
    pub fn new() -> Self {
        let user_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("quill");

        let mut config_manager = ConfigManager::new(&user_dir);
        if let Err(e) = config_manager.load() {
            eprintln!("Warning: could not load config: {}", e);
        }

        Self {
            running: true,
            buffer: Buffer::new(),
            viewport: Viewport::new(),
            registry: Registry::new(),
            status_message: String::from("quill | Ctrl+Q: Quit"),
            prompt_line: None,
            screen_size: (0, 0),
            user_dir,
            config: config_manager.into_config(),
        }
    }

    /// Open the editor on a file. Load problems never abort startup; they
    /// degrade to a status message over an empty buffer.
    pub fn with_file(path: &str) -> Self {
        let mut app = Self::new();
        let (buffer, status) = Buffer::open(PathBuf::from(path));
        app.buffer = buffer;
        app.status_message = status;
        app
    }

    /// Rows available for text, one row being reserved for the status line.
    pub fn display_height(&self) -> usize {
        (self.screen_size.1 as usize).saturating_sub(1)
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Re-run scroll reconciliation against the current screen size.
    pub fn reconcile_viewport(&mut self) {
        self.viewport.reconcile(
            self.buffer.cursor,
            self.screen_size.1 as usize,
            self.screen_size.0 as usize,
        );
    }

    /// Register every enabled built-in extension. Any registration failure
    /// aborts startup before the first draw.
    pub fn load_extensions<B: Backend, E: EventSource>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &mut E,
    ) -> Result<()> {
        self.register_extensions(builtin_extensions(), terminal, events)
    }

    /// Run the registration hook of each given extension, skipping the
    /// ones the config disables.
    pub fn register_extensions<B: Backend, E: EventSource>(
        &mut self,
        extensions: Vec<Box<dyn Extension>>,
        terminal: &mut Terminal<B>,
        events: &mut E,
    ) -> Result<()> {
        for extension in extensions {
            if self.config.is_disabled(extension.name()) {
                continue;
            }
            let mut ops = EditorOps {
                app: &mut *self,
                terminal: &mut *terminal,
                events: &mut *events,
                registration: true,
            };
            extension
                .register(&mut ops)
                .map_err(|e| anyhow!("failed to load extension '{}': {}", extension.name(), e))?;
        }
        Ok(())
    }

    /// The main loop: draw, block for the next event, dispatch. Returns
    /// once a quit is confirmed, or with an error when an extension fails
    /// to register or the terminal itself breaks.
    pub fn run<B: Backend, E: EventSource>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &mut E,
    ) -> Result<()> {
        self.load_extensions(terminal, events)?;

        while self.running {
            terminal.draw(|f| self.render(f))?;

            match events.next()? {
                Event::Key(key) => {
                    if let Flow::Stop = self.handle_key(key, terminal, events)? {
                        break;
                    }
                }
                Event::Resize(width, height) => {
                    self.screen_size = (width, height);
                    self.reconcile_viewport();
                }
                _ => {}
            }
        }

        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
