//! Panel controller
//!
//! Owns every piece of panel state and is the single writer for it. Host
//! messages and user actions come in through the methods below; each returns
//! the [`Effect`]s the driver has to carry out, in order.
//!
//! Command methods update button state optimistically. The host never
//! acknowledges a command, so the panel assumes it succeeded.

use crate::config::PanelConfig;
use crate::constants::WRONG_FILE_ALERT;
use crate::effect::Effect;
use crate::error::ProtocolError;
use crate::intake::{validate_controller_file, FileIntake, ReadTicket};
use crate::model::{Button, ButtonSet, History, MatchState, RobotSlot, RunState, Slot};
use crate::protocol::{HostMessage, PanelCommand};
use crate::render;
use crate::snapshot::PanelSnapshot;

/// The supervisor panel state machine.
#[derive(Clone, Debug)]
pub struct PanelController {
    config: PanelConfig,
    state: MatchState,
    robots: [RobotSlot; 2],
    history: History,
    buttons: ButtonSet,
    intake: FileIntake,
}

impl PanelController {
    pub fn new(config: PanelConfig) -> Self {
        Self {
            config,
            state: MatchState::default(),
            robots: [RobotSlot::default(), RobotSlot::default()],
            history: History::default(),
            buttons: ButtonSet::new(),
            intake: FileIntake::new(),
        }
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn robot(&self, slot: Slot) -> &RobotSlot {
        &self.robots[slot.index()]
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn buttons(&self) -> &ButtonSet {
        &self.buttons
    }

    // =========================================================================
    // Initial render
    // =========================================================================

    /// Full render of the current state, used once the page has loaded.
    pub fn attach(&self) -> Vec<Effect> {
        let mut effects = vec![
            Effect::SetTitle(self.config.window_title.clone()),
            render::timer(&self.config, &self.state).into(),
        ];
        for slot in Slot::ALL {
            let robot = self.robot(slot);
            effects.push(render::score(&self.state, slot).into());
            effects.push(render::name_label(slot, robot).into());
            effects.extend(render::slot_controls(slot, robot).map(Effect::from));
            effects.extend(
                render::human_indicator(&self.config, slot, robot)
                    .into_iter()
                    .map(Effect::from),
            );
            effects.push(render::activity_indicator(&self.config, slot, robot).into());
        }
        effects.extend(render::buttons(&self.buttons).into_iter().map(Effect::from));
        effects.push(render::history_table(&self.history).into());
        effects.push(render::winner_hidden().into());
        effects
    }

    // =========================================================================
    // Host messages
    // =========================================================================

    /// Parse and apply one raw host message.
    ///
    /// Unrecognized tags produce no effects. A malformed message is rejected
    /// before any state changes.
    pub fn receive(&mut self, message: &str) -> Result<Vec<Effect>, ProtocolError> {
        Ok(match HostMessage::parse(message)? {
            Some(msg) => self.apply(msg),
            None => Vec::new(),
        })
    }

    /// Apply a parsed host message.
    pub fn apply(&mut self, msg: HostMessage) -> Vec<Effect> {
        let mut effects = Vec::new();
        match msg {
            HostMessage::Startup => self.on_startup(&mut effects),
            HostMessage::Update { scores, elapsed } => {
                self.state.update(scores, elapsed);
                for slot in Slot::ALL {
                    effects.push(render::score(&self.state, slot).into());
                }
                effects.push(render::timer(&self.config, &self.state).into());
            }
            HostMessage::Loaded { slot, name } => {
                self.robots[slot.index()].load(name);
                self.render_slot_controls(slot, &mut effects);
            }
            HostMessage::Unloaded { slot } => {
                self.robots[slot.index()].unload();
                effects.push(render::clear_file_input(slot).into());
                self.render_slot_controls(slot, &mut effects);
            }
            HostMessage::Ended => self.on_ended(&mut effects),
            HostMessage::HumanLoaded { slot } => self.set_human(slot, true, &mut effects),
            HostMessage::HumanUnloaded { slot } => self.set_human(slot, false, &mut effects),
            HostMessage::ActivityLoaded { slot, colour } => {
                self.robots[slot.index()].activity = Some(colour);
                effects.push(render::activity_indicator(&self.config, slot, self.robot(slot)).into());
            }
            HostMessage::ActivityUnloaded { slot } => {
                self.robots[slot.index()].activity = None;
                effects.push(render::activity_indicator(&self.config, slot, self.robot(slot)).into());
            }
            HostMessage::HistoryUpdate { entries } => {
                self.history.replace(entries);
                effects.push(render::history_table(&self.history).into());
            }
        }
        effects
    }

    /// `startup` begins a new match: the previous winner screen is cleared
    /// and controllers may be changed again.
    fn on_startup(&mut self, effects: &mut Vec<Effect>) {
        self.state.started = true;
        self.state.run = RunState::Idle;
        self.state.winner_shown = false;
        self.set_button(Button::Run, true, effects);
        self.set_button(Button::Reset, true, effects);
        for slot in Slot::ALL {
            self.set_button(Button::Load(slot), true, effects);
            self.set_button(Button::Unload(slot), true, effects);
        }
        effects.push(render::winner_hidden().into());
    }

    fn on_ended(&mut self, effects: &mut Vec<Effect>) {
        self.set_button(Button::Run, false, effects);
        self.set_button(Button::Pause, false, effects);
        for slot in Slot::ALL {
            self.set_button(Button::Relocate(slot), false, effects);
        }
        if self.state.end() {
            effects.extend(
                render::winner_screen(&self.config, &self.state, &self.robots).map(Effect::from),
            );
        }
    }

    fn set_human(&mut self, slot: Slot, loaded: bool, effects: &mut Vec<Effect>) {
        self.robots[slot.index()].human_loaded = loaded;
        effects.extend(
            render::human_indicator(&self.config, slot, self.robot(slot))
                .into_iter()
                .map(Effect::from),
        );
    }

    fn render_slot_controls(&self, slot: Slot, effects: &mut Vec<Effect>) {
        let robot = self.robot(slot);
        effects.push(render::name_label(slot, robot).into());
        effects.extend(render::slot_controls(slot, robot).map(Effect::from));
    }

    // =========================================================================
    // User actions
    // =========================================================================

    /// Run button. Locks controller loading for the rest of the match.
    pub fn run_pressed(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        if !self.buttons.is_enabled(Button::Run) {
            return effects;
        }
        self.state.run = RunState::Running;
        self.set_button(Button::Run, false, &mut effects);
        effects.push(PanelCommand::Run.into());
        self.set_button(Button::Pause, true, &mut effects);
        for slot in Slot::ALL {
            self.set_button(Button::Load(slot), false, &mut effects);
            self.set_button(Button::Unload(slot), false, &mut effects);
            self.set_button(Button::Relocate(slot), true, &mut effects);
        }
        effects
    }

    pub fn pause_pressed(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        if !self.buttons.is_enabled(Button::Pause) {
            return effects;
        }
        self.state.run = RunState::Paused;
        self.set_button(Button::Pause, false, &mut effects);
        effects.push(PanelCommand::Pause.into());
        self.set_button(Button::Run, true, &mut effects);
        effects
    }

    /// Reset button. Everything stays disabled until the host restarts and
    /// sends `startup` again.
    pub fn reset_pressed(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        if !self.buttons.is_enabled(Button::Reset) {
            return effects;
        }
        self.state.run = RunState::Idle;
        self.state.started = false;
        self.set_button(Button::Run, false, &mut effects);
        self.set_button(Button::Pause, false, &mut effects);
        self.set_button(Button::Reset, false, &mut effects);
        for slot in Slot::ALL {
            self.set_button(Button::Relocate(slot), false, &mut effects);
        }
        effects.push(PanelCommand::Reset.into());
        effects
    }

    /// Load button: open the slot's file picker.
    pub fn load_pressed(&mut self, slot: Slot) -> Vec<Effect> {
        if !self.buttons.is_enabled(Button::Load(slot)) {
            return Vec::new();
        }
        vec![Effect::OpenFilePicker(slot)]
    }

    /// Unload button. Also drops any upload still being read for the slot.
    pub fn unload_pressed(&mut self, slot: Slot) -> Vec<Effect> {
        if !self.buttons.is_enabled(Button::Unload(slot)) {
            return Vec::new();
        }
        self.intake.cancel(slot);
        vec![PanelCommand::Unload { slot }.into()]
    }

    pub fn relocate_pressed(&mut self, slot: Slot) -> Vec<Effect> {
        if !self.buttons.is_enabled(Button::Relocate(slot)) {
            return Vec::new();
        }
        vec![PanelCommand::Relocate { slot }.into()]
    }

    /// A file was chosen in a slot's picker.
    ///
    /// Returns a ticket when the driver should read the file; the wrong kind
    /// of file yields an alert and no ticket.
    pub fn file_selected(&mut self, slot: Slot, file_name: &str) -> (Vec<Effect>, Option<ReadTicket>) {
        match validate_controller_file(file_name, &self.config.controller_extension) {
            Ok(()) => (Vec::new(), Some(self.intake.begin(slot))),
            Err(_) => (vec![Effect::Alert(WRONG_FILE_ALERT.to_string())], None),
        }
    }

    /// A read started by [`file_selected`](Self::file_selected) finished.
    pub fn file_read(&mut self, ticket: ReadTicket, contents: String) -> Vec<Effect> {
        self.intake
            .complete(ticket, contents)
            .map(Effect::from)
            .into_iter()
            .collect()
    }

    /// Whether a read ticket is still wanted.
    pub fn is_read_current(&self, ticket: ReadTicket) -> bool {
        self.intake.is_current(ticket)
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    pub fn snapshot(&self) -> PanelSnapshot {
        PanelSnapshot::capture(self)
    }

    fn set_button(&mut self, button: Button, enabled: bool, effects: &mut Vec<Effect>) {
        self.buttons.set(button, enabled);
        effects.push(render::button(button, enabled).into());
    }
}

impl Default for PanelController {
    fn default() -> Self {
        Self::new(PanelConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::Role;
    use crate::render::{Display, Patch};

    fn started() -> PanelController {
        let mut panel = PanelController::default();
        panel.receive("startup").unwrap();
        panel
    }

    fn sent(effects: &[Effect]) -> Vec<String> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Send(cmd) => Some(cmd.encode()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_attach_renders_initial_state() {
        let panel = PanelController::default();
        let effects = panel.attach();
        assert_eq!(effects[0], Effect::SetTitle("Simulation Controls".into()));
        assert!(effects.contains(&Effect::Patch(Patch::SetText {
            role: Role::Timer,
            text: "08:00".into()
        })));
        assert!(effects.contains(&Effect::Patch(Patch::SetDisplay {
            role: Role::WinnerScreen,
            display: Display::None
        })));
        assert!(effects.contains(&Effect::Patch(Patch::SetDisabled {
            role: Role::Button(Button::Run),
            disabled: true
        })));
        assert!(sent(&effects).is_empty());
    }

    #[test]
    fn test_startup_enables_run_and_reset() {
        let panel = started();
        assert!(panel.buttons().is_enabled(Button::Run));
        assert!(panel.buttons().is_enabled(Button::Reset));
        assert!(!panel.buttons().is_enabled(Button::Pause));
        assert!(panel.state().started);
    }

    #[test]
    fn test_run_disables_itself() {
        let mut panel = started();
        let effects = panel.run_pressed();
        assert_eq!(sent(&effects), vec!["run"]);
        assert!(!panel.buttons().is_enabled(Button::Run));
        assert!(panel.buttons().is_enabled(Button::Pause));
        assert!(!panel.buttons().is_enabled(Button::Load(Slot::Zero)));
        assert!(!panel.buttons().is_enabled(Button::Unload(Slot::One)));
        assert!(panel.buttons().is_enabled(Button::Relocate(Slot::One)));
        assert_eq!(panel.state().run, RunState::Running);

        assert!(panel.run_pressed().is_empty());
    }

    #[test]
    fn test_run_before_startup_does_nothing() {
        let mut panel = PanelController::default();
        assert!(panel.run_pressed().is_empty());
        assert!(panel.pause_pressed().is_empty());
        assert!(panel.reset_pressed().is_empty());
    }

    #[test]
    fn test_pause_then_resume() {
        let mut panel = started();
        panel.run_pressed();
        assert_eq!(sent(&panel.pause_pressed()), vec!["pause"]);
        assert_eq!(panel.state().run, RunState::Paused);
        assert!(panel.buttons().is_enabled(Button::Run));
        assert!(!panel.buttons().is_enabled(Button::Pause));

        assert_eq!(sent(&panel.run_pressed()), vec!["run"]);
        assert_eq!(panel.state().run, RunState::Running);
    }

    #[test]
    fn test_reset_disables_everything() {
        let mut panel = started();
        panel.run_pressed();
        assert_eq!(sent(&panel.reset_pressed()), vec!["reset"]);
        for b in [Button::Run, Button::Pause, Button::Reset, Button::Relocate(Slot::Zero)] {
            assert!(!panel.buttons().is_enabled(b), "{:?} still enabled", b);
        }
        assert!(!panel.state().started);
    }

    #[test]
    fn test_update_renders_scores_and_timer() {
        let mut panel = started();
        let effects = panel.receive("update,12,4,65.7").unwrap();
        assert_eq!(
            effects,
            vec![
                Effect::Patch(Patch::SetText {
                    role: Role::Score(Slot::Zero),
                    text: "12".into()
                }),
                Effect::Patch(Patch::SetText {
                    role: Role::Score(Slot::One),
                    text: "4".into()
                }),
                Effect::Patch(Patch::SetText {
                    role: Role::Timer,
                    text: "06:55".into()
                }),
            ]
        );
    }

    #[test]
    fn test_malformed_update_changes_nothing() {
        let mut panel = started();
        panel.receive("update,1,2,3").unwrap();
        assert!(panel.receive("update,9,9").is_err());
        assert_eq!(panel.state().scores, [1, 2]);
        assert_eq!(panel.state().elapsed_secs, 3);
    }

    #[test]
    fn test_unknown_tag_is_ignored() {
        let mut panel = started();
        assert_eq!(panel.receive("lightsOn,1"), Ok(vec![]));
    }

    #[test]
    fn test_ended_shows_winner_once() {
        let mut panel = started();
        panel.receive("loaded0,Red").unwrap();
        panel.receive("loaded1,Blue").unwrap();
        panel.run_pressed();
        panel.receive("update,5,2,480").unwrap();

        let first = panel.receive("ended").unwrap();
        assert!(first.contains(&Effect::Patch(Patch::SetText {
            role: Role::WinnerText,
            text: "Red wins!".into()
        })));
        assert!(!panel.buttons().is_enabled(Button::Run));
        assert!(!panel.buttons().is_enabled(Button::Pause));

        let second = panel.receive("ended").unwrap();
        assert!(!second.iter().any(|e| matches!(
            e,
            Effect::Patch(Patch::SetDisplay { role: Role::WinnerScreen, .. })
        )));
        assert_eq!(panel.state().run, RunState::Ended);
    }

    #[test]
    fn test_startup_after_end_rearms_winner() {
        let mut panel = started();
        panel.receive("ended").unwrap();
        panel.reset_pressed();
        let effects = panel.receive("startup").unwrap();
        assert!(effects.contains(&Effect::Patch(render::winner_hidden())));
        assert!(!panel.state().winner_shown);
        assert!(panel.buttons().is_enabled(Button::Load(Slot::One)));
    }

    #[test]
    fn test_wrong_file_alerts() {
        let mut panel = started();
        let (effects, ticket) = panel.file_selected(Slot::Zero, "controller.txt");
        assert_eq!(effects, vec![Effect::Alert("Please select a python file.".into())]);
        assert!(ticket.is_none());
    }

    #[test]
    fn test_file_upload() {
        let mut panel = started();
        let (effects, ticket) = panel.file_selected(Slot::One, "controller.py");
        assert!(effects.is_empty());
        let effects = panel.file_read(ticket.unwrap(), "import math".into());
        assert_eq!(sent(&effects), vec!["robot1File,import math"]);
    }

    #[test]
    fn test_unload_cancels_pending_read() {
        let mut panel = started();
        let (_, ticket) = panel.file_selected(Slot::Zero, "a.py");
        let ticket = ticket.unwrap();
        assert_eq!(sent(&panel.unload_pressed(Slot::Zero)), vec!["robot0Unload"]);
        assert!(!panel.is_read_current(ticket));
        assert!(panel.file_read(ticket, "x".into()).is_empty());
    }

    #[test]
    fn test_load_opens_picker() {
        let mut panel = started();
        assert_eq!(panel.load_pressed(Slot::One), vec![Effect::OpenFilePicker(Slot::One)]);
        panel.run_pressed();
        assert!(panel.load_pressed(Slot::One).is_empty());
    }

    #[test]
    fn test_relocate_only_during_match() {
        let mut panel = started();
        assert!(panel.relocate_pressed(Slot::Zero).is_empty());
        panel.run_pressed();
        assert_eq!(sent(&panel.relocate_pressed(Slot::Zero)), vec!["relocate,0"]);
    }

    #[test]
    fn test_activity_and_human() {
        let mut panel = started();
        panel.receive("activityLoaded1,0,0,1").unwrap();
        assert!(panel.robot(Slot::One).activity.is_some());
        let effects = panel.receive("humanLoaded1").unwrap();
        assert_eq!(effects.len(), 4);
        assert!(panel.robot(Slot::One).human_loaded);
        panel.receive("activityUnloaded1").unwrap();
        panel.receive("humanUnloaded1").unwrap();
        assert_eq!(panel.robot(Slot::One), &RobotSlot::default());
    }
}
