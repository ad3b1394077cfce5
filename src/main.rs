use anyhow::Result;

fn main() -> Result<()> {
    vim_history_search::cli::run()
}
