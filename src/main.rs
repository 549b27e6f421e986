mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::parse_cli;
use workflow::ViewerWorkflow;

fn main() -> Result<()> {
    let cli = parse_cli();

    if cli.list_themes {
        for name in quire::tui::theme::names() {
            println!("{name}");
        }
        return Ok(());
    }

    let resolved = settings::load(&cli)?;

    if cli.print_config {
        resolved.print_summary();
    }

    let workflow = ViewerWorkflow::from_config(resolved)?;
    workflow.run()
}
