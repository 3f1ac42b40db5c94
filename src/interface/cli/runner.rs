//! 패널 명령 실행기(CLI/REPL 공용).

use anyhow::Result;

use crate::application::panel::PanelSession;
use crate::domain::mode_schedule::default_mode_schedules;
use crate::interface::cli::command::PanelCommand;
use crate::interface::cli::composition::AppComposition;

/// 명령 하나를 세션에 대해 실행한다.
pub async fn execute_command(
    composition: &AppComposition,
    session: &mut PanelSession,
    command: PanelCommand,
) -> Result<()> {
    match command {
        PanelCommand::ShowTree => {
            let json = composition
                .inspect_panel_usecase()
                .settings_tree_pretty_json(session)?;
            println!("{json}");
        }
        PanelCommand::ShowConfig => {
            let json = composition.inspect_panel_usecase().config_pretty_json(session)?;
            println!("{json}");
        }
        PanelCommand::Edit(action) => {
            let changed = composition
                .apply_settings_action_usecase()
                .execute_strict(session, &action)?;
            report_edit(composition, changed);
        }
        PanelCommand::HostAction(action) => {
            let changed = composition
                .apply_settings_action_usecase()
                .execute(session, &action)?;
            report_edit(composition, changed);
        }
        PanelCommand::ListGaits => print_gaits(session),
        PanelCommand::SelectGait(key) => {
            composition
                .select_gait_usecase()
                .execute(session, &key)
                .await?;
        }
        PanelCommand::SetTarget(target, value) => {
            composition
                .set_target_usecase()
                .execute(session, target, value)
                .await?;
        }
        PanelCommand::Trigger(command) => {
            composition
                .trigger_service_usecase()
                .execute(session, command)
                .await?;
        }
    }

    Ok(())
}

fn report_edit(composition: &AppComposition, changed: bool) {
    let message = if changed {
        "config updated and saved"
    } else {
        "config unchanged"
    };
    composition.reporter().status("settings", message);
}

fn print_gaits(session: &PanelSession) {
    let current = &session.config().mode_schedule.name;
    for schedule in default_mode_schedules() {
        let marker = if &schedule.name == current { "*" } else { " " };
        println!(
            "{marker} {:<14} {:<14} period={:.3}s phases={}",
            schedule.name,
            schedule.label,
            schedule.period(),
            schedule.mode_sequence.len()
        );
    }
}
