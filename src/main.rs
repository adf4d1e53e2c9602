use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = wscribe_intro::cli::Cli::parse();
    wscribe_intro::run(cli)
}
