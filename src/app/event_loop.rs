use std::time::Duration;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{self, MissedTickBehavior};

use crate::error::AppResult;
use crate::event::DomainEvent;

use super::core::App;
use super::event_bus::EventBusRuntime;
use super::terminal_session::TerminalSession;

enum WaitEvent {
    Event(DomainEvent),
    Closed,
}

enum LoopControl {
    Continue,
    Break,
}

impl App {
    pub async fn run(&mut self) -> AppResult<()> {
        let mut session = TerminalSession::enter()?;
        let (mut loop_event_rx, mut loop_event_runtime) = EventBusRuntime::spawn();
        let mut lookup_tick = time::interval(Duration::from_millis(self.config.ui.lookup_poll_ms));
        lookup_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
        tracing::info!(keymap = ?self.keymap, "booking desk started");

        let mut needs_redraw = true;
        let result = loop {
            if needs_redraw {
                if let Err(err) = self.render_frame(&mut session) {
                    break Err(err);
                }
                needs_redraw = false;
            }

            let waited = wait_next_event(&mut loop_event_rx, &mut lookup_tick).await;
            match self.handle_waited_event(waited, &mut needs_redraw) {
                LoopControl::Continue => {}
                LoopControl::Break => break Ok(()),
            }
        };

        loop_event_runtime.shutdown();
        session.restore()?;
        tracing::info!(drafts = self.form.drafts().len(), "booking desk stopped");
        result
    }

    fn handle_waited_event(&mut self, waited: WaitEvent, needs_redraw: &mut bool) -> LoopControl {
        match waited {
            WaitEvent::Event(DomainEvent::Input(event)) => {
                let outcome = self.handle_input_event(event);
                if outcome.quit_requested {
                    return LoopControl::Break;
                }
                *needs_redraw |= outcome.redraw;
            }
            WaitEvent::Event(DomainEvent::InputError(message)) => {
                tracing::warn!(%message, "terminal input error");
                self.status.set(format!("input error: {message}"));
                *needs_redraw = true;
            }
            WaitEvent::Event(DomainEvent::LookupTick) => {
                *needs_redraw |= self.form.poll();
            }
            WaitEvent::Closed => return LoopControl::Break,
        }
        LoopControl::Continue
    }
}

async fn wait_next_event(
    loop_event_rx: &mut UnboundedReceiver<DomainEvent>,
    lookup_tick: &mut time::Interval,
) -> WaitEvent {
    tokio::select! {
        biased;
        maybe_loop = loop_event_rx.recv() => {
            match maybe_loop {
                Some(event) => WaitEvent::Event(event),
                None => WaitEvent::Closed,
            }
        },
        _ = lookup_tick.tick() => {
            WaitEvent::Event(DomainEvent::LookupTick)
        },
    }
}
