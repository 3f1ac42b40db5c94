//! 대화형 패널 쉘(REPL) 인터페이스.

use std::io::{self, IsTerminal, Write};

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::application::panel::PanelSession;
use crate::domain::command::ServiceCommand;
use crate::domain::target::LocomotionTarget;
use crate::interface::cli::command::{PanelCommand, edit_action, parse_host_action};
use crate::interface::cli::composition::AppComposition;
use crate::interface::cli::runner::execute_command;

const HELP: &[(&str, &str)] = &[
    ("/tree", "print the settings tree"),
    ("/config", "print the effective config"),
    ("/set <group.field> <value>", "edit a config field"),
    ("/action <json>", "apply a raw host settings action"),
    ("/gaits", "list built-in gaits"),
    ("/gait <name>", "publish a gait"),
    ("/com-height <m>", "set the COM height target"),
    ("/displacement-velocity <m/s>", "set the displacement velocity target"),
    ("/rotation-velocity <rad/s>", "set the rotation velocity target"),
    ("/stand-up | /lay-down | /reset-simulation", "call a robot service"),
    ("/exit", "leave the shell"),
];

/// 대화형 입력으로 `/command`를 처리한다.
pub async fn run_repl(composition: &AppComposition, session: &mut PanelSession) -> Result<()> {
    print_welcome(session);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        eprint!("> ");
        io::stderr().flush()?;

        let Some(line) = lines.next_line().await? else {
            eprintln!();
            break;
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match parse_repl_command(input) {
            Ok(ReplCommand::Exit) => break,
            Ok(ReplCommand::Help) => print_help(),
            Ok(ReplCommand::Panel(command)) => {
                if let Err(err) = execute_command(composition, session, command).await {
                    eprintln!("error: {err:#}");
                }
            }
            Err(msg) => {
                eprintln!("error: {msg}");
                eprintln!("hint: type /help for the command list");
            }
        }
    }

    Ok(())
}

#[derive(Debug, PartialEq)]
enum ReplCommand {
    Exit,
    Help,
    Panel(PanelCommand),
}

fn parse_repl_command(input: &str) -> Result<ReplCommand, String> {
    if !input.starts_with('/') {
        return Err("slash command only. example: /gait trot".to_string());
    }

    let (head, rest) = match input.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (input, ""),
    };

    let command = match head {
        "/exit" | "/quit" => return Ok(ReplCommand::Exit),
        "/help" => return Ok(ReplCommand::Help),
        "/tree" => PanelCommand::ShowTree,
        "/config" => PanelCommand::ShowConfig,
        "/gaits" => PanelCommand::ListGaits,
        "/set" => {
            let Some((path, value)) = rest.split_once(char::is_whitespace) else {
                return Err("usage: /set <group.field> <value>".to_string());
            };
            PanelCommand::Edit(edit_action(path, value.trim())?)
        }
        "/action" => {
            if rest.is_empty() {
                return Err("usage: /action <json>".to_string());
            }
            PanelCommand::HostAction(parse_host_action(rest)?)
        }
        "/gait" => {
            if rest.is_empty() {
                return Err("usage: /gait <name>".to_string());
            }
            PanelCommand::SelectGait(rest.to_string())
        }
        "/com-height" => PanelCommand::SetTarget(LocomotionTarget::ComHeight, parse_number(rest)?),
        "/displacement-velocity" => {
            PanelCommand::SetTarget(LocomotionTarget::DisplacementVelocity, parse_number(rest)?)
        }
        "/rotation-velocity" => {
            PanelCommand::SetTarget(LocomotionTarget::RotationVelocity, parse_number(rest)?)
        }
        "/stand-up" => PanelCommand::Trigger(ServiceCommand::StandUp),
        "/lay-down" => PanelCommand::Trigger(ServiceCommand::LayDown),
        "/reset-simulation" => PanelCommand::Trigger(ServiceCommand::ResetSimulation),
        other => return Err(format!("unknown command: {other}")),
    };

    Ok(ReplCommand::Panel(command))
}

fn parse_number(raw: &str) -> Result<f64, String> {
    raw.parse::<f64>()
        .map_err(|_| format!("expected a number, got `{raw}`"))
}

fn print_welcome(session: &PanelSession) {
    let interactive = io::stderr().is_terminal();
    let title = paint(session.title(), "1;36", interactive);
    let config = session.config();

    eprintln!("+------------------------------------------------------------+");
    eprintln!("| {:<58} |", title);
    eprintln!("+------------------------------------------------------------+");
    eprintln!("| {:<58} |", format!("Gait: {}", config.mode_schedule.label));
    let topic_line = format!("Schedule topic: {}", config.mode_schedule_topic);
    eprintln!("| {:<58} |", fit_box_line(&topic_line, 58));
    eprintln!("| {:<58} |", format!("Known topics: {}", session.topics().len()));
    eprintln!("+------------------------------------------------------------+");
    eprintln!("| {:<58} |", "type /help for commands");
    eprintln!("+------------------------------------------------------------+");
}

fn print_help() {
    for (usage, description) in HELP {
        eprintln!("  {usage:<42} {description}");
    }
    eprintln!();
    for target in LocomotionTarget::ALL {
        eprintln!("  {}", describe_target(target));
    }
}

fn describe_target(target: LocomotionTarget) -> String {
    let (min, max) = target.bounds();
    let range = if max.is_finite() {
        format!("{min}..={max}")
    } else {
        format!("{min}..")
    };
    format!(
        "{}: {range} {}, step {}, default {}",
        target.label(),
        target.unit(),
        target.step(),
        target.initial_value()
    )
}

fn paint(text: &str, ansi: &str, interactive: bool) -> String {
    if interactive {
        format!("\x1b[{ansi}m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

fn fit_box_line(text: &str, width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= width {
        return text.to_string();
    }

    if width <= 3 {
        return ".".repeat(width);
    }

    let keep = width - 3;
    let head: String = chars.into_iter().take(keep).collect();
    format!("{head}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::settings::SettingsTreeAction;

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!(
            parse_repl_command("/gait standing trot"),
            Ok(ReplCommand::Panel(PanelCommand::SelectGait(
                "standing trot".to_string()
            )))
        );
        assert_eq!(
            parse_repl_command("/com-height 0.42"),
            Ok(ReplCommand::Panel(PanelCommand::SetTarget(
                LocomotionTarget::ComHeight,
                0.42
            )))
        );
        assert_eq!(
            parse_repl_command("/set services.standUpService /robot/up"),
            Ok(ReplCommand::Panel(PanelCommand::Edit(
                SettingsTreeAction::update(&["services", "standUpService"], "/robot/up")
            )))
        );
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(parse_repl_command("gait trot").is_err());
        assert!(parse_repl_command("/gait").is_err());
        assert!(parse_repl_command("/rotation-velocity fast").is_err());
        assert!(parse_repl_command("/set services.standUpService").is_err());
        assert!(parse_repl_command("/fly").is_err());
    }

    #[test]
    fn exit_aliases() {
        assert_eq!(parse_repl_command("/exit"), Ok(ReplCommand::Exit));
        assert_eq!(parse_repl_command("/quit"), Ok(ReplCommand::Exit));
    }

    #[test]
    fn target_hints_show_range_step_and_default() {
        assert_eq!(
            describe_target(LocomotionTarget::ComHeight),
            "COM height: 0..=2 m, step 0.01, default 0.3"
        );
        assert_eq!(
            describe_target(LocomotionTarget::RotationVelocity),
            "Target rotation velocity: 0.. rad/s, step 0.1, default 1"
        );
    }

    #[test]
    fn long_lines_are_truncated() {
        assert_eq!(fit_box_line("abcdefgh", 6), "abc...");
        assert_eq!(fit_box_line("abc", 6), "abc");
    }
}
