use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "wscribe-intro",
    version,
    about = "Generate the spoken introduction clip for the wscribe-editor website"
)]
pub struct Cli {
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,
}
