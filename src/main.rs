//! `legged-panel` 바이너리 진입점.

use legged_panel::interface::cli::{AppComposition, Cli, CliAction, execute_command, run_repl};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let action = match Cli::parse_action() {
        Ok(action) => action,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(2);
        }
    };

    let (context, command) = match action {
        CliAction::Interactive(context) => (context, None),
        CliAction::Run(context, command) => (context, Some(command)),
    };

    let composition = AppComposition::new(context.state_path, context.topics);
    let mut session = match composition.open_panel_usecase().execute() {
        Ok(session) => session,
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    };

    let result = match command {
        Some(command) => execute_command(&composition, &mut session, command).await,
        None => run_repl(&composition, &mut session).await,
    };

    if let Err(err) = result {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
