//! Fake capabilities that record every call into a shared log

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use lcd5110_hal::{BusAddress, GpioPort, Level, PinId, SpiBus};

/// One observed capability call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Open(BusAddress),
    Close,
    Clock(u32),
    Transfer(Vec<u8>),
    Configure(Vec<PinId>, Level),
    Set(PinId, Level),
}

pub type Log = Rc<RefCell<Vec<Op>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpioFault;

/// SPI fake; can be told to fail the n-th transfer (0-based)
pub struct FakeBus {
    log: Log,
    transfers: usize,
    pub fail_transfer: Option<usize>,
}

impl SpiBus for FakeBus {
    type Error = BusFault;

    fn open(&mut self, address: BusAddress) -> Result<(), BusFault> {
        self.log.borrow_mut().push(Op::Open(address));
        Ok(())
    }

    fn close(&mut self) -> Result<(), BusFault> {
        self.log.borrow_mut().push(Op::Close);
        Ok(())
    }

    fn set_clock_rate(&mut self, hz: u32) -> Result<(), BusFault> {
        self.log.borrow_mut().push(Op::Clock(hz));
        Ok(())
    }

    fn transfer(&mut self, data: &[u8]) -> Result<(), BusFault> {
        let n = self.transfers;
        self.transfers += 1;
        if self.fail_transfer == Some(n) {
            return Err(BusFault);
        }
        self.log.borrow_mut().push(Op::Transfer(data.to_vec()));
        Ok(())
    }
}

/// GPIO fake
pub struct FakeGpio {
    log: Log,
}

impl GpioPort for FakeGpio {
    type Error = GpioFault;

    fn configure_outputs(&mut self, pins: &[PinId], initial: Level) -> Result<(), GpioFault> {
        self.log
            .borrow_mut()
            .push(Op::Configure(pins.to_vec(), initial));
        Ok(())
    }

    fn set_level(&mut self, pin: PinId, level: Level) -> Result<(), GpioFault> {
        self.log.borrow_mut().push(Op::Set(pin, level));
        Ok(())
    }
}

/// Bus and GPIO fakes sharing one log
pub fn fakes() -> (FakeBus, FakeGpio, Log) {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let bus = FakeBus {
        log: log.clone(),
        transfers: 0,
        fail_transfer: None,
    };
    let gpio = FakeGpio { log: log.clone() };
    (bus, gpio, log)
}

/// Take everything logged so far
pub fn drain(log: &Log) -> Vec<Op> {
    log.borrow_mut().drain(..).collect()
}

/// Expected ops for one framed write with software chip-select on `cs`
pub fn framed(cs: PinId, dc: PinId, mode_level: Level, payload: &[u8]) -> Vec<Op> {
    vec![
        Op::Set(cs, Level::Low),
        Op::Set(dc, mode_level),
        Op::Transfer(payload.to_vec()),
        Op::Set(cs, Level::High),
    ]
}

/// Payloads of all transfers in `ops`
pub fn transfers(ops: &[Op]) -> Vec<Vec<u8>> {
    ops.iter()
        .filter_map(|op| match op {
            Op::Transfer(data) => Some(data.clone()),
            _ => None,
        })
        .collect()
}
