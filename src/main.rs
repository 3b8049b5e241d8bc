//! Quire - a paginated rich-text editor

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

mod runtime;

use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use quire::cli::CliArgs;

use runtime::App;

fn main() -> Result<()> {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    quire::tracing::init();

    let startup = CliArgs::parse().into_config()?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(startup);
    event_loop.run_app(&mut app)?;

    Ok(())
}
