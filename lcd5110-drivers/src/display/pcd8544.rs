//! PCD8544 LCD driver
//!
//! Driver for 84x48 PCD8544-based LCD modules over SPI, with a data/command
//! line, a reset line, a backlight enable and optionally a GPIO chip-select.
//!
//! # Write framing
//!
//! Every payload goes out as one framed write:
//! - chip-select low (software-managed only)
//! - D/C low for commands, high for data
//! - payload, complemented first if it is data and inverse mode is on
//! - chip-select high (software-managed only)
//!
//! # Reset
//!
//! Init claims every line driven low, then releases reset by driving it
//! high. The low period between claiming the lines and the release is the
//! only reset pulse this driver produces; boards that need a longer pulse
//! must hold reset low themselves before calling `reinit`.
//!
//! # Concurrency
//!
//! The driver owns its bus and GPIO and does no locking. Calls from more
//! than one thread must be serialized by the caller.

use lcd5110_core::addressing::Cursor;
use lcd5110_core::command::{self, Contrast};
use lcd5110_core::config::{ConfigError, DisplayConfig};
use lcd5110_core::font;
use lcd5110_core::geometry::{CELL_WIDTH, FRAME_SIZE};
use lcd5110_core::state::{Event, State};
use lcd5110_core::traits::MonoDisplay;
use lcd5110_hal::{GpioPort, Level, SpiBus};

#[cfg(feature = "embedded-hal")]
use lcd5110_hal::ehal::{EhalSpi, PinBank};

/// SPI clock used for the panel
pub const BUS_CLOCK_HZ: u32 = 500_000;

/// Meaning of the bytes in a write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WriteMode {
    /// Controller instructions (D/C low)
    Command,
    /// Display RAM contents (D/C high)
    Data,
}

impl WriteMode {
    /// Level for the data/command line
    pub const fn dc_level(self) -> Level {
        match self {
            WriteMode::Command => Level::Low,
            WriteMode::Data => Level::High,
        }
    }
}

/// Driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError<BE, GE> {
    /// Configuration rejected before any hardware access
    Config(ConfigError),
    /// SPI capability error
    Bus(BE),
    /// GPIO capability error
    Gpio(GE),
    /// Image is not exactly one frame long
    ImageSize {
        /// Required length
        expected: usize,
        /// Length supplied
        actual: usize,
    },
    /// Data payload longer than the display RAM
    PayloadTooLong {
        /// Largest accepted length
        max: usize,
        /// Length supplied
        actual: usize,
    },
    /// Bus not open; run `reinit` first
    NotReady,
}

/// PCD8544 driver
pub struct Pcd8544<B, G> {
    bus: B,
    gpio: G,
    config: DisplayConfig,
    state: State,
    /// Bus handle currently held
    bus_open: bool,
    /// Output lines configured by a previous init
    lines_claimed: bool,
    /// Complement data bytes on the way out
    inverse: bool,
    /// Logical backlight state (before polarity)
    backlight_on: bool,
}

/// Driver over embedded-hal peripherals, with a pin bank of `N` lines
#[cfg(feature = "embedded-hal")]
pub type EhalPcd8544<D, P, const N: usize> = Pcd8544<EhalSpi<D>, PinBank<P, N>>;

impl<B, G> Pcd8544<B, G>
where
    B: SpiBus,
    G: GpioPort,
{
    /// Create a driver without touching hardware
    ///
    /// The configuration is checked by [`MonoDisplay::reinit`].
    pub fn new(config: DisplayConfig, bus: B, gpio: G) -> Self {
        Self {
            bus,
            gpio,
            config,
            state: State::Uninitialized,
            bus_open: false,
            lines_claimed: false,
            inverse: false,
            backlight_on: false,
        }
    }

    /// Create a driver and run the init sequence
    pub fn init(
        config: DisplayConfig,
        bus: B,
        gpio: G,
    ) -> Result<Self, DriverError<B::Error, G::Error>> {
        let mut display = Self::new(config, bus, gpio);
        display.reinit()?;
        Ok(display)
    }

    /// Current lifecycle state
    pub fn state(&self) -> State {
        self.state
    }

    /// Configuration in use
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Check if data writes are complemented
    pub fn is_inverse(&self) -> bool {
        self.inverse
    }

    /// Logical backlight state
    pub fn is_backlight_on(&self) -> bool {
        self.backlight_on
    }

    /// Contrast sent by the next init
    pub fn contrast(&self) -> u8 {
        self.config.contrast
    }

    /// Change contrast; takes effect on the next [`MonoDisplay::reinit`]
    pub fn set_contrast(&mut self, contrast: Contrast) {
        self.config.contrast = contrast.value();
    }

    /// Send one framed payload
    ///
    /// The payload always goes out as a single transfer. Data payloads
    /// longer than one frame are rejected before any I/O.
    ///
    /// Chip-select is released even if the transfer fails; the transfer
    /// error wins if both fail.
    pub fn write(
        &mut self,
        mode: WriteMode,
        payload: &[u8],
    ) -> Result<(), DriverError<B::Error, G::Error>> {
        if !self.bus_open || !self.state.can_write() {
            return Err(DriverError::NotReady);
        }
        if mode == WriteMode::Data && payload.len() > FRAME_SIZE {
            #[cfg(feature = "defmt")]
            defmt::warn!("Data write of {=usize} bytes exceeds frame", payload.len());
            return Err(DriverError::PayloadTooLong {
                max: FRAME_SIZE,
                actual: payload.len(),
            });
        }

        let cs = self.config.pins.chip_select.pin();
        if let Some(pin) = cs {
            self.gpio.set_low(pin).map_err(DriverError::Gpio)?;
        }

        let result = self.transfer_framed(mode, payload);

        match cs {
            Some(pin) => {
                let released = self.gpio.set_high(pin).map_err(DriverError::Gpio);
                result.and(released)
            }
            None => result,
        }
    }

    /// Draw a full frame; the length is checked by the type
    pub fn print_frame(
        &mut self,
        frame: &[u8; FRAME_SIZE],
    ) -> Result<(), DriverError<B::Error, G::Error>> {
        self.print_image(frame)
    }

    /// Close the bus handle; safe to call repeatedly
    ///
    /// The driver returns to `Uninitialized` and needs another
    /// [`MonoDisplay::reinit`] before drawing.
    pub fn close(&mut self) -> Result<(), DriverError<B::Error, G::Error>> {
        self.state = self.state.transition(Event::Released);
        self.close_bus()
    }

    /// Hand back the bus and GPIO
    ///
    /// Call [`Self::close`] first if the bus handle must be released.
    pub fn release(self) -> (B, G) {
        (self.bus, self.gpio)
    }

    fn close_bus(&mut self) -> Result<(), DriverError<B::Error, G::Error>> {
        if self.bus_open {
            self.bus.close().map_err(DriverError::Bus)?;
            self.bus_open = false;
        }
        Ok(())
    }

    fn transfer_framed(
        &mut self,
        mode: WriteMode,
        payload: &[u8],
    ) -> Result<(), DriverError<B::Error, G::Error>> {
        self.gpio
            .set_level(self.config.pins.data_command, mode.dc_level())
            .map_err(DriverError::Gpio)?;

        if mode == WriteMode::Data && self.inverse {
            let mut inverted = [0u8; FRAME_SIZE];
            let out = &mut inverted[..payload.len()];
            for (dst, src) in out.iter_mut().zip(payload) {
                *dst = !*src;
            }
            self.bus.transfer(out).map_err(DriverError::Bus)
        } else {
            self.bus.transfer(payload).map_err(DriverError::Bus)
        }
    }

    fn apply_backlight(&mut self) -> Result<(), DriverError<B::Error, G::Error>> {
        let level = Level::from(self.backlight_on != self.config.backlight_active_low);
        self.gpio
            .set_level(self.config.pins.backlight, level)
            .map_err(DriverError::Gpio)
    }

    fn set_address(&mut self, cursor: Cursor) -> Result<(), DriverError<B::Error, G::Error>> {
        self.write(WriteMode::Command, &cursor.commands())
    }

    fn send_commands(&mut self, commands: &[u8]) -> Result<(), DriverError<B::Error, G::Error>> {
        for &c in commands {
            self.write(WriteMode::Command, &[c])?;
        }
        Ok(())
    }

    fn ensure_ready(&self) -> Result<(), DriverError<B::Error, G::Error>> {
        if self.state.is_ready() && self.bus_open {
            Ok(())
        } else {
            Err(DriverError::NotReady)
        }
    }

    /// Write one glyph cell; `None` means the character has no glyph
    fn draw_cell(
        &mut self,
        cell: Option<[u8; CELL_WIDTH]>,
    ) -> Result<bool, DriverError<B::Error, G::Error>> {
        match cell {
            Some(cell) => {
                self.write(WriteMode::Data, &cell)?;
                Ok(true)
            }
            None => {
                #[cfg(feature = "defmt")]
                defmt::debug!("Skipping character without glyph");
                Ok(false)
            }
        }
    }

    fn run_init(&mut self, contrast: Contrast) -> Result<(), DriverError<B::Error, G::Error>> {
        self.close_bus()?;

        let pins = self.config.output_pins();
        self.gpio
            .configure_outputs(&pins, Level::Low)
            .map_err(DriverError::Gpio)?;
        self.lines_claimed = true;

        self.bus
            .open(self.config.spi.address())
            .map_err(DriverError::Bus)?;
        self.bus_open = true;
        self.bus
            .set_clock_rate(BUS_CLOCK_HZ)
            .map_err(DriverError::Bus)?;

        self.apply_backlight()?;

        if let Some(cs) = self.config.pins.chip_select.pin() {
            self.gpio.set_high(cs).map_err(DriverError::Gpio)?;
        }

        // Release reset
        self.gpio
            .set_high(self.config.pins.reset)
            .map_err(DriverError::Gpio)?;

        self.send_commands(&command::init_sequence(contrast))?;
        self.clear()?;
        self.send_commands(&command::POST_CLEAR)
    }
}

impl<B, G> MonoDisplay for Pcd8544<B, G>
where
    B: SpiBus,
    G: GpioPort,
{
    type Error = DriverError<B::Error, G::Error>;

    fn reinit(&mut self) -> Result<(), Self::Error> {
        let contrast = self.config.validate().map_err(|e| {
            #[cfg(feature = "defmt")]
            defmt::warn!("Rejecting display config: {:?}", e);
            DriverError::Config(e)
        })?;

        #[cfg(feature = "defmt")]
        defmt::info!("Initializing LCD (contrast {=u8})", contrast.value());

        self.state = self.state.transition(Event::InitStarted);
        match self.run_init(contrast) {
            Ok(()) => {
                self.state = self.state.transition(Event::InitComplete);
                #[cfg(feature = "defmt")]
                defmt::info!("LCD ready");
                Ok(())
            }
            Err(e) => {
                self.state = self.state.transition(Event::TransportFault);
                #[cfg(feature = "defmt")]
                defmt::warn!("LCD init failed");
                Err(e)
            }
        }
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.set_address(Cursor::HOME)?;
        self.write(WriteMode::Data, &[0u8; FRAME_SIZE])
    }

    fn cursor(&mut self, bank: u8, column: u8) -> Result<bool, Self::Error> {
        match Cursor::new(bank, column) {
            Some(cursor) => {
                self.set_address(cursor)?;
                Ok(true)
            }
            None => {
                #[cfg(feature = "defmt")]
                defmt::debug!("Rejected cursor ({=u8}, {=u8})", bank, column);
                Ok(false)
            }
        }
    }

    fn backlight(&mut self, on: bool) -> Result<(), Self::Error> {
        self.backlight_on = on;

        #[cfg(feature = "defmt")]
        defmt::debug!("Backlight {}", on);

        // Lines are not claimed yet; init applies the stored flag
        if !self.lines_claimed {
            return Ok(());
        }
        self.apply_backlight()
    }

    fn inverse(&mut self, on: bool) {
        #[cfg(feature = "defmt")]
        defmt::debug!("Inverse {}", on);

        self.inverse = on;
    }

    fn print_bytes(&mut self, text: &[u8]) -> Result<usize, Self::Error> {
        self.ensure_ready()?;

        let mut drawn = 0;
        for &code in text {
            if self.draw_cell(font::glyph_cell(code))? {
                drawn += 1;
            }
        }
        Ok(drawn)
    }

    fn print_str(&mut self, text: &str) -> Result<usize, Self::Error> {
        self.ensure_ready()?;

        let mut drawn = 0;
        for ch in text.chars() {
            if self.draw_cell(font::glyph_cell_for_char(ch))? {
                drawn += 1;
            }
        }
        Ok(drawn)
    }

    fn print_image(&mut self, pixels: &[u8]) -> Result<(), Self::Error> {
        if pixels.len() != FRAME_SIZE {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "Image has {=usize} bytes, expected {=usize}",
                pixels.len(),
                FRAME_SIZE
            );
            return Err(DriverError::ImageSize {
                expected: FRAME_SIZE,
                actual: pixels.len(),
            });
        }
        self.ensure_ready()?;

        self.set_address(Cursor::HOME)?;
        self.write(WriteMode::Data, pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;
    use lcd5110_core::config::ChipSelect;
    use lcd5110_hal::{BusAddress, PinId};

    /// Counts transfers and keeps the last payload
    #[derive(Default)]
    struct CountingBus {
        open: bool,
        transfers: usize,
        last: Vec<u8, FRAME_SIZE>,
    }

    impl SpiBus for CountingBus {
        type Error = ();

        fn open(&mut self, _address: BusAddress) -> Result<(), ()> {
            self.open = true;
            Ok(())
        }

        fn close(&mut self) -> Result<(), ()> {
            self.open = false;
            Ok(())
        }

        fn set_clock_rate(&mut self, _hz: u32) -> Result<(), ()> {
            Ok(())
        }

        fn transfer(&mut self, data: &[u8]) -> Result<(), ()> {
            self.transfers += 1;
            self.last.clear();
            self.last.extend_from_slice(data).map_err(|_| ())
        }
    }

    /// Remembers the last level per pin
    #[derive(Default)]
    struct LevelGpio {
        levels: Vec<(PinId, Level), 8>,
    }

    impl LevelGpio {
        fn level(&self, pin: PinId) -> Option<Level> {
            self.levels.iter().find(|(p, _)| *p == pin).map(|(_, l)| *l)
        }
    }

    impl GpioPort for LevelGpio {
        type Error = ();

        fn configure_outputs(&mut self, pins: &[PinId], initial: Level) -> Result<(), ()> {
            for &pin in pins {
                self.set_level(pin, initial)?;
            }
            Ok(())
        }

        fn set_level(&mut self, pin: PinId, level: Level) -> Result<(), ()> {
            match self.levels.iter_mut().find(|(p, _)| *p == pin) {
                Some(entry) => entry.1 = level,
                None => self.levels.push((pin, level)).map_err(|_| ())?,
            }
            Ok(())
        }
    }

    fn ready_display() -> Pcd8544<CountingBus, LevelGpio> {
        let mut display =
            Pcd8544::new(DisplayConfig::new(), CountingBus::default(), LevelGpio::default());
        display.reinit().unwrap();
        display
    }

    #[test]
    fn test_dc_levels() {
        assert_eq!(WriteMode::Command.dc_level(), Level::Low);
        assert_eq!(WriteMode::Data.dc_level(), Level::High);
    }

    #[test]
    fn test_write_before_init() {
        let mut display =
            Pcd8544::new(DisplayConfig::new(), CountingBus::default(), LevelGpio::default());
        assert_eq!(
            display.write(WriteMode::Command, &[0x20]),
            Err(DriverError::NotReady)
        );
        assert_eq!(display.print_str("A"), Err(DriverError::NotReady));
        assert_eq!(display.bus.transfers, 0);
    }

    #[test]
    fn test_ready_after_init() {
        let display = ready_display();
        assert_eq!(display.state(), State::Ready);
        assert!(display.bus.open);
        // Lines idle after init: chip-select deselected, reset released
        assert_eq!(display.gpio.level(24), Some(Level::High));
        assert_eq!(display.gpio.level(21), Some(Level::High));
        // Last transfer is the normal-mode command
        assert_eq!(display.bus.last.as_slice(), &[0x0C]);
    }

    #[test]
    fn test_inverse_full_frame_is_one_transfer() {
        let mut display = ready_display();
        display.inverse(true);
        let before = display.bus.transfers;

        display.write(WriteMode::Data, &[0x0F; FRAME_SIZE]).unwrap();

        assert_eq!(display.bus.transfers, before + 1);
        assert!(display.bus.last.iter().all(|&b| b == 0xF0));
    }

    #[test]
    fn test_inverse_never_touches_commands() {
        let mut display = ready_display();
        display.inverse(true);

        display.write(WriteMode::Command, &[0x0C]).unwrap();
        assert_eq!(display.bus.last.as_slice(), &[0x0C]);
    }

    #[test]
    fn test_hardware_chip_select_leaves_gpio_alone() {
        let config = DisplayConfig::new().with_chip_select(ChipSelect::Hardware);
        let mut display = Pcd8544::new(config, CountingBus::default(), LevelGpio::default());
        display.reinit().unwrap();

        assert_eq!(display.gpio.level(24), None);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut display = ready_display();
        display.close().unwrap();
        display.close().unwrap();

        assert_eq!(display.state(), State::Uninitialized);
        assert!(!display.bus.open);
        assert_eq!(display.clear(), Err(DriverError::NotReady));
    }
}
