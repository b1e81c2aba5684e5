use anyhow::Result;
use clap::Parser;
use winit::event_loop::{ControlFlow, EventLoop};

use tabdock::cli::CliArgs;

mod runtime;

use runtime::App;

fn main() -> Result<()> {
    tabdock::tracing::init();

    let startup = CliArgs::parse()
        .into_config()
        .map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!(panels = ?startup.panels, "starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);
    let mut app = App::new(startup);

    event_loop.run_app(&mut app)?;

    Ok(())
}
