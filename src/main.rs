use anyhow::Result;
use zadachnik::commands::Cli;

fn main() -> Result<()> {
    Cli::menu()
}
