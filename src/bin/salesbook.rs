use clap::Parser;
use salesbook::{
    cli::{output, run, Cli},
    init,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init(!cli.no_color);

    if let Err(err) = run(cli).await {
        output::error(format!("Error: {err}"));
        std::process::exit(1);
    }
}
