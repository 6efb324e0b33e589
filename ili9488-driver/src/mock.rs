//! Recording hardware for tests

use ili9488_hal::{Error, HardwareAccess, PinState};

/// One call made through the contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Cs(PinState),
    Mode(PinState),
    Reset(PinState),
    Transmit(Vec<u8>),
    Delay(u32),
}

/// Bytes as the controller sees them
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Write {
    Command(u8),
    Data(u8),
    /// Multi-byte data transfer (pixel stream)
    Bulk(Vec<u8>),
}

/// Mock hardware that logs every call
#[derive(Default)]
pub struct MockHardware {
    pub events: Vec<Event>,
    transmits: usize,
    /// Fail the n-th transmit (1-based) with the given error
    fail_on: Option<(usize, Error)>,
    /// Fail every transmit from the n-th onwards
    fail_from: Option<(usize, Error)>,
}

impl MockHardware {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail exactly one transmit
    pub fn failing_on(n: usize, err: Error) -> Self {
        Self {
            fail_on: Some((n, err)),
            ..Self::default()
        }
    }

    /// Fail every transmit starting with the n-th
    pub fn failing_from(n: usize, err: Error) -> Self {
        Self {
            fail_from: Some((n, err)),
            ..Self::default()
        }
    }

    pub fn transmit_count(&self) -> usize {
        self.transmits
    }

    pub fn count(&self, event: &Event) -> usize {
        self.events.iter().filter(|e| *e == event).count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Decode the event log into command/data writes using the D/C level
    /// active at each transmit
    pub fn writes(&self) -> Vec<Write> {
        let mut mode = PinState::Deasserted;
        let mut out = Vec::new();
        for event in &self.events {
            match event {
                Event::Mode(state) => mode = *state,
                Event::Transmit(bytes) if bytes.len() == 1 => {
                    out.push(match mode {
                        PinState::Deasserted => Write::Command(bytes[0]),
                        PinState::Asserted => Write::Data(bytes[0]),
                    });
                }
                Event::Transmit(bytes) => out.push(Write::Bulk(bytes.clone())),
                _ => {}
            }
        }
        out
    }
}

impl HardwareAccess for MockHardware {
    fn set_cs(&mut self, state: PinState) -> Result<(), Error> {
        self.events.push(Event::Cs(state));
        Ok(())
    }

    fn set_mode(&mut self, state: PinState) -> Result<(), Error> {
        self.events.push(Event::Mode(state));
        Ok(())
    }

    fn set_reset(&mut self, state: PinState) -> Result<(), Error> {
        self.events.push(Event::Reset(state));
        Ok(())
    }

    fn transmit(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.transmits += 1;
        self.events.push(Event::Transmit(bytes.to_vec()));

        if let Some((n, err)) = self.fail_on {
            if self.transmits == n {
                return Err(err);
            }
        }
        if let Some((n, err)) = self.fail_from {
            if self.transmits >= n {
                return Err(err);
            }
        }
        Ok(())
    }

    fn delay_ms(&mut self, ms: u32) {
        self.events.push(Event::Delay(ms));
    }
}

/// Hardware with one capability missing
pub struct Unpopulated {
    pub calls: usize,
}

impl HardwareAccess for Unpopulated {
    fn set_cs(&mut self, _state: PinState) -> Result<(), Error> {
        self.calls += 1;
        Ok(())
    }

    fn set_mode(&mut self, _state: PinState) -> Result<(), Error> {
        self.calls += 1;
        Ok(())
    }

    fn set_reset(&mut self, _state: PinState) -> Result<(), Error> {
        self.calls += 1;
        Ok(())
    }

    fn transmit(&mut self, _bytes: &[u8]) -> Result<(), Error> {
        self.calls += 1;
        Ok(())
    }

    fn delay_ms(&mut self, _ms: u32) {
        self.calls += 1;
    }

    fn is_populated(&self) -> bool {
        false
    }
}
