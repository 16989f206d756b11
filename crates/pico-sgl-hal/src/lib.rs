#![no_std]

/// Abstracts the display hand-off over any transport (SPI/DMA scanline
/// transfer on hardware, file or window output on a desktop host).
///
/// The renderer side must observe the busy/flip handshake: a new frame
/// transfer may only start once the previous one has completed.
pub trait DisplayLink {
    type Error: core::fmt::Debug;

    /// Returns true while a previously started transfer is still in flight.
    fn busy(&self) -> bool;

    /// Block until any outstanding transfer has completed.
    fn wait_idle(&mut self);

    /// Hand a finished frame of packed pixels to the display.
    ///
    /// `pixels` is row-major, `width * height` entries, in the display's
    /// packed wire format. Implementations may latch the data and return
    /// before the physical transfer completes; callers synchronize through
    /// `busy`/`wait_idle`.
    fn present(&mut self, pixels: &[u16], width: usize, height: usize) -> Result<(), Self::Error>;
}

/// Abstracts raw input sampling across platforms.
///
/// Returns unfiltered hardware state; smoothing and deadzone correction
/// happen in the platform-agnostic input layer on top of this trait.
pub trait InputPins {
    /// Current level of each button, index order A, B, C, stick press.
    fn poll_buttons(&mut self) -> [bool; 4];

    /// Raw analog axis samples (X, Y), signed with ±2048 full scale
    /// (the ADC range of the reference joystick, re-centered).
    fn poll_axes(&mut self) -> [i16; 2];
}
