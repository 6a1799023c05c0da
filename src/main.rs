use clap::Parser;

use clickrank::cli::Cli;
use clickrank::config::{get_config, init_config_from};
use clickrank::interfaces::cli::run_cli_command;
use clickrank::system::init_logging;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_config_from(&cli.config);

    // guard 必须存活到进程结束，否则缓冲的日志会丢失
    let _guard = match init_logging(&get_config()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            std::process::exit(1);
        }
    };

    if let Err(e) = run_cli_command(cli.command).await {
        eprintln!("{}", e.format_colored());
        std::process::exit(e.exit_code());
    }
}
