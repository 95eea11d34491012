//! The mode engine: menu navigation, mode dispatch and the main loop.
//!
//! Provides [`ModeEngine`], which owns the [`Board`] peripherals, the
//! [`SystemState`] and the [`MenuSelection`]. The only state it shares with
//! the button interrupt is a borrowed [`PressLatch`].

use embedded_hal::delay::DelayNs;

use crate::config::{ConfigError, ControllerConfig};
use crate::latch::PressLatch;
use crate::peripherals::{AnalogChannel, AnalogSampler, Board, Display, PwmOutput};
use crate::types::{MenuSelection, Navigation, SystemState};
use crate::{buzzer, fade, joystick, menu};

/// Runs the menu and the three output modes on a single control thread.
///
/// Call [`tick`](ModeEngine::tick) once per main-loop iteration, or hand
/// control over with [`run`](ModeEngine::run). While a mode is running,
/// `tick` blocks inside that mode until the button is pressed.
///
/// # Type Parameters
/// * `'l` - Lifetime of the press latch reference
/// * `A` - Analog sampler implementation
/// * `P` - PWM output implementation
/// * `D` - Display implementation
/// * `T` - Delay implementation
pub struct ModeEngine<'l, A, P, D, T> {
    board: Board<A, P, D, T>,
    latch: &'l PressLatch,
    config: ControllerConfig,
    state: SystemState,
    selection: MenuSelection,
}

impl<'l, A, P, D, T> ModeEngine<'l, A, P, D, T>
where
    A: AnalogSampler,
    P: PwmOutput,
    D: Display,
    T: DelayNs,
{
    /// Creates an engine in the menu with the reference configuration.
    pub fn new(board: Board<A, P, D, T>, latch: &'l PressLatch) -> Self {
        Self {
            board,
            latch,
            config: ControllerConfig::DEFAULT,
            state: SystemState::Menu,
            selection: MenuSelection::new(),
        }
    }

    /// Creates an engine in the menu with a custom configuration.
    ///
    /// # Returns
    /// * `Ok(ModeEngine)` - Configuration is valid
    /// * `Err` - Configuration rejected by [`ControllerConfig::validate`]
    pub fn with_config(
        board: Board<A, P, D, T>,
        latch: &'l PressLatch,
        config: ControllerConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new(board, latch)
        })
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> SystemState {
        self.state
    }

    /// Current menu selection.
    #[inline]
    pub fn selection(&self) -> MenuSelection {
        self.selection
    }

    /// Active configuration.
    #[inline]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Shared access to the peripherals.
    pub fn board(&self) -> &Board<A, P, D, T> {
        &self.board
    }

    /// Exclusive access to the peripherals.
    pub fn board_mut(&mut self) -> &mut Board<A, P, D, T> {
        &mut self.board
    }

    /// Consumes the engine and returns the peripherals.
    pub fn into_board(self) -> Board<A, P, D, T> {
        self.board
    }

    /// Executes one main-loop iteration, including the trailing tick delay.
    ///
    /// In the menu this navigates, handles a pending press or renders. In a
    /// running state it blocks in the mode until the press that ends it, then
    /// returns to the menu with the first entry selected.
    pub fn tick(&mut self) {
        match self.state {
            SystemState::Menu => self.menu_tick(),
            running => {
                self.run_mode(running);
                self.return_to_menu();
            }
        }

        self.board.delay.delay_ms(self.config.tick_interval_ms);
    }

    /// Runs the main loop forever.
    pub fn run(&mut self) -> ! {
        #[cfg(feature = "defmt")]
        defmt::info!("mode engine: running");

        loop {
            self.tick();
        }
    }

    fn menu_tick(&mut self) {
        self.navigate();

        if self.latch.is_set() {
            self.latch.clear();
            if let Some(next) = SystemState::for_selection(self.selection.index()) {
                #[cfg(feature = "defmt")]
                defmt::info!("mode engine: {} -> {}", self.state, next);

                self.state = next;
            }
            self.board.display.clear();
            return;
        }

        menu::render(&mut self.board.display, self.selection.offset());
    }

    fn navigate(&mut self) {
        let raw = self.board.sampler.sample(AnalogChannel::Vertical);
        let navigation =
            Navigation::from_sample(raw, self.config.nav_next_below, self.config.nav_previous_above);

        if self.selection.navigate(navigation) {
            #[cfg(feature = "defmt")]
            defmt::debug!("menu: {} -> entry {}", navigation, self.selection.index());

            self.board.delay.delay_ms(self.config.nav_settle_ms);
        }
    }

    fn run_mode(&mut self, state: SystemState) {
        let Board {
            sampler,
            pwm,
            delay,
            ..
        } = &mut self.board;

        match state {
            SystemState::RunningJoystick => {
                joystick::run(sampler, pwm, delay, self.latch, &self.config)
            }
            SystemState::RunningBuzzer => buzzer::run(pwm, delay, self.latch, &self.config),
            SystemState::RunningRgb => fade::run(pwm, delay, self.latch, &self.config),
            SystemState::Menu => {}
        }
    }

    fn return_to_menu(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::info!("mode engine: {} -> {}", self.state, SystemState::Menu);

        self.state = SystemState::Menu;
        self.selection = MenuSelection::new();
    }
}
