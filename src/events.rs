pub enum Event {
    SimEvent(SimEvent),
    AppEvent(AppEvent),
}

pub enum SimEvent {
    /// Flip the running flag
    ToggleRunning,

    /// Reseed the board and zero the generation counter
    Reset,
}

pub enum AppEvent {
    /// Exit the application
    Exit,
}
