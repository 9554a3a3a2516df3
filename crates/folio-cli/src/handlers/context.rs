use crate::args::{OutputFormat, ViewModeArgs};
use crate::presentation::{CommandResultViewModel, ConsoleRenderer, CreateView, Renderer, ViewMode};
use anyhow::Result;
use serde::Serialize;

/// Context for handler execution with consistent presentation utilities
pub struct HandlerContext {
    pub format: OutputFormat,
    pub view_mode: ViewMode,
}

impl HandlerContext {
    pub fn new(format: OutputFormat, view_mode: &ViewModeArgs) -> Self {
        Self {
            format,
            view_mode: view_mode.resolve(),
        }
    }

    /// Context for commands without density flags
    pub fn standard(format: OutputFormat) -> Self {
        Self {
            format,
            view_mode: ViewMode::Standard,
        }
    }

    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let renderer = ConsoleRenderer::new(self.format == OutputFormat::Json, self.view_mode);
        renderer.render(view_model)
    }
}
