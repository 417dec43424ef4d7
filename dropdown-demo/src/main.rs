mod app;
mod data;
mod error;
mod terminal;
mod view;

use std::fs::File;
use std::path::PathBuf;

use crossterm::event::EventStream;
use dropdown::{Dropdown, DropdownHost};
use futures::StreamExt;
use log::{LevelFilter, info};
use simplelog::{Config, WriteLogger};

use app::{Demo, Flow};
use data::DemoData;
use error::DemoError;
use terminal::TerminalGuard;
use view::TerminalView;

#[tokio::main]
async fn main() {
    if let Ok(log_file) = File::create("dropdown-demo.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    if let Err(e) = run(std::env::args().nth(1).map(PathBuf::from)).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(data_file: Option<PathBuf>) -> Result<(), DemoError> {
    let data = match data_file {
        Some(path) => {
            info!("Loading {}", path.display());
            DemoData::load(&path)?
        }
        None => DemoData::sample(),
    };

    let max_rows = data.config.max_visible_rows;
    let mut dropdown = Dropdown::new(data.config)?;
    dropdown.set_records(data.records);
    dropdown.set_model(data.model.as_ref());

    let mut host = DropdownHost::new(dropdown, TerminalView::new(max_rows));
    host.mount()?;
    let mut demo = Demo::new(host);

    let mut guard = TerminalGuard::new()?;
    demo.focus_search();
    demo.draw(guard.out())?;

    let mut events = EventStream::new();
    while let Some(event) = events.next().await {
        if demo.handle(event?) == Flow::Quit {
            break;
        }
        demo.draw(guard.out())?;
    }

    demo.shutdown();
    Ok(())
}
