/// Behaviours that differ between CHIP-8 interpreters. Some ROMs only work
/// with a particular combination.
#[derive(Debug, Copy, Clone, PartialEq, Eq, clap::ValueEnum)]
pub enum Quirk {
    /// 8XY1/8XY2/8XY3 reset VF to 0
    VfReset,
    /// FX55/FX65 leave I unchanged
    Memory,
    /// at most one sprite draw per timer tick
    DisplayWait,
    /// sprites are clipped at the screen edges instead of wrapping round
    Clipping,
    /// 8XY6/8XYE shift VX in place and ignore VY
    Shifting,
    /// BXNN jumps to XNN + VX rather than NNN + V0
    Jumping,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Quirks {
    pub vf_reset: bool,
    pub memory: bool,
    pub display_wait: bool,
    pub clipping: bool,
    pub shifting: bool,
    pub jumping: bool,
}

impl Quirks {
    pub fn is_enabled(&self, quirk: Quirk) -> bool {
        match quirk {
            Quirk::VfReset => self.vf_reset,
            Quirk::Memory => self.memory,
            Quirk::DisplayWait => self.display_wait,
            Quirk::Clipping => self.clipping,
            Quirk::Shifting => self.shifting,
            Quirk::Jumping => self.jumping,
        }
    }

    pub fn set(&mut self, quirk: Quirk, enabled: bool) {
        let flag = match quirk {
            Quirk::VfReset => &mut self.vf_reset,
            Quirk::Memory => &mut self.memory,
            Quirk::DisplayWait => &mut self.display_wait,
            Quirk::Clipping => &mut self.clipping,
            Quirk::Shifting => &mut self.shifting,
            Quirk::Jumping => &mut self.jumping,
        };
        *flag = enabled;
    }

    pub fn with(mut self, quirk: Quirk, enabled: bool) -> Self {
        self.set(quirk, enabled);
        self
    }
}

impl Default for Quirks {
    /// shifts from VY, I moves after FX55/FX65, BNNN uses V0, sprites clip
    fn default() -> Self {
        Quirks {
            vf_reset: false,
            memory: false,
            display_wait: false,
            clipping: true,
            shifting: false,
            jumping: false,
        }
    }
}
