use winit::{
    event::{Event, WindowEvent},
    event_loop::ControlFlow,
};

/// What the frame loop does after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Keep draining events.
    Idle,
    /// The queue is drained: render and present one frame.
    Draw,
    /// Quit was requested: leave the loop without drawing.
    Exit,
}
impl Step {
    #[must_use]
    pub const fn control_flow(self) -> ControlFlow {
        match self {
            Step::Exit => ControlFlow::Exit,
            Step::Idle | Step::Draw => ControlFlow::Poll,
        }
    }
}

/// Input state gathered while draining the event queue.
/// Only the request to close the window is acted on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Input {
    quit: bool,
}
impl Input {
    pub fn handle(&mut self, event: &WindowEvent<'_>) {
        if let WindowEvent::CloseRequested = event {
            self.quit = true;
        }
    }

    /// Feed one event from the loop and decide what happens next.
    /// Quit is only acted on once the queue has been drained.
    pub fn step<T>(&mut self, event: &Event<'_, T>) -> Step {
        match event {
            Event::WindowEvent { event, .. } => {
                self.handle(event);
                Step::Idle
            }
            Event::MainEventsCleared if self.quit => Step::Exit,
            Event::MainEventsCleared => Step::Draw,
            _ => Step::Idle,
        }
    }

    /// Once set this never clears.
    #[must_use]
    pub const fn quit(&self) -> bool {
        self.quit
    }
}
