use crate::engine::Engine;
use crate::lifecycle::Lifecycle;
use std::io::IsTerminal;

/// Context used throughout the application
#[derive(Debug)]
pub struct Context {
    /// Whether stdin is a terminal, decides if exec allocates a tty
    pub interactive: bool,

    /// Engine to use, in dry run it only prints the commands
    pub engine: Engine,
}

impl Context {
    pub fn new(engine: &str, dry_run: bool) -> Self {
        Self {
            interactive: std::io::stdin().is_terminal(),
            engine: Engine::new(engine, dry_run),
        }
    }

    /// Lifecycle operations using the configured engine
    pub fn lifecycle(&self) -> Lifecycle<'_, Engine> {
        Lifecycle::new(&self.engine, self.interactive)
    }
}
