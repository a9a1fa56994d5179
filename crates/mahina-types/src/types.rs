use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The eight classic phases of the moon.
///
/// Ordered through the synodic month, starting at new moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MoonPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    pub const ALL: [MoonPhase; 8] = [
        MoonPhase::New,
        MoonPhase::WaxingCrescent,
        MoonPhase::FirstQuarter,
        MoonPhase::WaxingGibbous,
        MoonPhase::Full,
        MoonPhase::WaningGibbous,
        MoonPhase::LastQuarter,
        MoonPhase::WaningCrescent,
    ];

    pub fn is_waxing(&self) -> bool {
        matches!(
            self,
            MoonPhase::WaxingCrescent | MoonPhase::FirstQuarter | MoonPhase::WaxingGibbous
        )
    }

    pub fn is_waning(&self) -> bool {
        matches!(
            self,
            MoonPhase::WaningGibbous | MoonPhase::LastQuarter | MoonPhase::WaningCrescent
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            MoonPhase::New => "new moon",
            MoonPhase::WaxingCrescent => "waxing crescent",
            MoonPhase::FirstQuarter => "first quarter",
            MoonPhase::WaxingGibbous => "waxing gibbous",
            MoonPhase::Full => "full moon",
            MoonPhase::WaningGibbous => "waning gibbous",
            MoonPhase::LastQuarter => "last quarter",
            MoonPhase::WaningCrescent => "waning crescent",
        }
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The three ten-night periods of the Hawaiian month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Anahulu {
    /// Nights 1-10, the growing moon.
    Hoonui,
    /// Nights 11-20, the full moon.
    Piha,
    /// Nights 21-30, the diminishing moon.
    Hoemi,
}

impl fmt::Display for Anahulu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Anahulu::Hoonui => "Hoʻonui (growing)",
            Anahulu::Piha => "Piha (full)",
            Anahulu::Hoemi => "Hoʻēmi (diminishing)",
        };
        f.write_str(s)
    }
}

/// The thirty nights of the Hawaiian lunar month (Kaulana Mahina).
///
/// Night 1 (Hilo) is the first sliver after new moon; night 30 (Muku)
/// is the dark night that closes the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HawaiianMoon {
    Hilo,
    Hoaka,
    KuKahi,
    KuLua,
    KuKolu,
    KuPau,
    OleKuKahi,
    OleKuLua,
    OleKuKolu,
    OlePau,
    Huna,
    Mohalu,
    Hua,
    Akua,
    Hoku,
    Mahealani,
    Kulu,
    LaauKuKahi,
    LaauKuLua,
    LaauPau,
    /// Second ʻOle Kū Kahi, in the waning anahulu.
    OleKuKahiWaning,
    /// Second ʻOle Kū Lua, in the waning anahulu.
    OleKuLuaWaning,
    /// Second ʻOle Pau, in the waning anahulu.
    OlePauWaning,
    KaloaKuKahi,
    KaloaKuLua,
    KaloaPau,
    Kane,
    Lono,
    Mauli,
    Muku,
}

impl HawaiianMoon {
    /// All nights in calendar order.
    pub const ALL: [HawaiianMoon; 30] = [
        HawaiianMoon::Hilo,
        HawaiianMoon::Hoaka,
        HawaiianMoon::KuKahi,
        HawaiianMoon::KuLua,
        HawaiianMoon::KuKolu,
        HawaiianMoon::KuPau,
        HawaiianMoon::OleKuKahi,
        HawaiianMoon::OleKuLua,
        HawaiianMoon::OleKuKolu,
        HawaiianMoon::OlePau,
        HawaiianMoon::Huna,
        HawaiianMoon::Mohalu,
        HawaiianMoon::Hua,
        HawaiianMoon::Akua,
        HawaiianMoon::Hoku,
        HawaiianMoon::Mahealani,
        HawaiianMoon::Kulu,
        HawaiianMoon::LaauKuKahi,
        HawaiianMoon::LaauKuLua,
        HawaiianMoon::LaauPau,
        HawaiianMoon::OleKuKahiWaning,
        HawaiianMoon::OleKuLuaWaning,
        HawaiianMoon::OlePauWaning,
        HawaiianMoon::KaloaKuKahi,
        HawaiianMoon::KaloaKuLua,
        HawaiianMoon::KaloaPau,
        HawaiianMoon::Kane,
        HawaiianMoon::Lono,
        HawaiianMoon::Mauli,
        HawaiianMoon::Muku,
    ];

    /// Night number within the month, 1..=30.
    pub fn night(&self) -> u8 {
        *self as u8 + 1
    }

    /// Looks up a night by its 1-based number.
    pub fn from_night(night: u8) -> Option<Self> {
        night
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i as usize))
            .copied()
    }

    pub fn anahulu(&self) -> Anahulu {
        match self.night() {
            1..=10 => Anahulu::Hoonui,
            11..=20 => Anahulu::Piha,
            _ => Anahulu::Hoemi,
        }
    }

    /// Name with ʻokina and kahakō.
    pub fn name(&self) -> &'static str {
        match self {
            HawaiianMoon::Hilo => "Hilo",
            HawaiianMoon::Hoaka => "Hoaka",
            HawaiianMoon::KuKahi => "Kū Kahi",
            HawaiianMoon::KuLua => "Kū Lua",
            HawaiianMoon::KuKolu => "Kū Kolu",
            HawaiianMoon::KuPau => "Kū Pau",
            HawaiianMoon::OleKuKahi | HawaiianMoon::OleKuKahiWaning => "ʻOle Kū Kahi",
            HawaiianMoon::OleKuLua | HawaiianMoon::OleKuLuaWaning => "ʻOle Kū Lua",
            HawaiianMoon::OleKuKolu => "ʻOle Kū Kolu",
            HawaiianMoon::OlePau | HawaiianMoon::OlePauWaning => "ʻOle Pau",
            HawaiianMoon::Huna => "Huna",
            HawaiianMoon::Mohalu => "Mōhalu",
            HawaiianMoon::Hua => "Hua",
            HawaiianMoon::Akua => "Akua",
            HawaiianMoon::Hoku => "Hoku",
            HawaiianMoon::Mahealani => "Māhealani",
            HawaiianMoon::Kulu => "Kulu",
            HawaiianMoon::LaauKuKahi => "Lāʻau Kū Kahi",
            HawaiianMoon::LaauKuLua => "Lāʻau Kū Lua",
            HawaiianMoon::LaauPau => "Lāʻau Pau",
            HawaiianMoon::KaloaKuKahi => "Kāloa Kū Kahi",
            HawaiianMoon::KaloaKuLua => "Kāloa Kū Lua",
            HawaiianMoon::KaloaPau => "Kāloa Pau",
            HawaiianMoon::Kane => "Kāne",
            HawaiianMoon::Lono => "Lono",
            HawaiianMoon::Mauli => "Mauli",
            HawaiianMoon::Muku => "Muku",
        }
    }

    /// Name without diacritics, for terminals and file names.
    pub fn ascii_name(&self) -> &'static str {
        match self {
            HawaiianMoon::Hilo => "Hilo",
            HawaiianMoon::Hoaka => "Hoaka",
            HawaiianMoon::KuKahi => "Ku Kahi",
            HawaiianMoon::KuLua => "Ku Lua",
            HawaiianMoon::KuKolu => "Ku Kolu",
            HawaiianMoon::KuPau => "Ku Pau",
            HawaiianMoon::OleKuKahi | HawaiianMoon::OleKuKahiWaning => "Ole Ku Kahi",
            HawaiianMoon::OleKuLua | HawaiianMoon::OleKuLuaWaning => "Ole Ku Lua",
            HawaiianMoon::OleKuKolu => "Ole Ku Kolu",
            HawaiianMoon::OlePau | HawaiianMoon::OlePauWaning => "Ole Pau",
            HawaiianMoon::Huna => "Huna",
            HawaiianMoon::Mohalu => "Mohalu",
            HawaiianMoon::Hua => "Hua",
            HawaiianMoon::Akua => "Akua",
            HawaiianMoon::Hoku => "Hoku",
            HawaiianMoon::Mahealani => "Mahealani",
            HawaiianMoon::Kulu => "Kulu",
            HawaiianMoon::LaauKuKahi => "Laau Ku Kahi",
            HawaiianMoon::LaauKuLua => "Laau Ku Lua",
            HawaiianMoon::LaauPau => "Laau Pau",
            HawaiianMoon::KaloaKuKahi => "Kaloa Ku Kahi",
            HawaiianMoon::KaloaKuLua => "Kaloa Ku Lua",
            HawaiianMoon::KaloaPau => "Kaloa Pau",
            HawaiianMoon::Kane => "Kane",
            HawaiianMoon::Lono => "Lono",
            HawaiianMoon::Mauli => "Mauli",
            HawaiianMoon::Muku => "Muku",
        }
    }
}

impl fmt::Display for HawaiianMoon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Moon information for one calendar day, taken at local noon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LunarDay {
    pub date: NaiveDate,
    /// Fraction of the synodic month elapsed, in `[0, 1)`.
    pub fraction: f64,
    /// Illuminated fraction of the disc, in `[0, 1]`.
    pub illumination: f64,
    pub moon: HawaiianMoon,
    pub phase: MoonPhase,
}

impl LunarDay {
    pub fn new(date: NaiveDate, fraction: f64, illumination: f64, moon: HawaiianMoon, phase: MoonPhase) -> Self {
        Self { date, fraction, illumination, moon, phase }
    }
}

impl fmt::Display for LunarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date.format("%Y-%m-%d"), self.moon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_night_numbers_round_trip() {
        for (i, moon) in HawaiianMoon::ALL.iter().enumerate() {
            assert_eq!(moon.night() as usize, i + 1);
            assert_eq!(HawaiianMoon::from_night(moon.night()), Some(*moon));
        }
        assert_eq!(HawaiianMoon::from_night(0), None);
        assert_eq!(HawaiianMoon::from_night(31), None);
    }

    #[test]
    fn test_anahulu_split() {
        assert_eq!(HawaiianMoon::Hilo.anahulu(), Anahulu::Hoonui);
        assert_eq!(HawaiianMoon::OlePau.anahulu(), Anahulu::Hoonui);
        assert_eq!(HawaiianMoon::Huna.anahulu(), Anahulu::Piha);
        assert_eq!(HawaiianMoon::LaauPau.anahulu(), Anahulu::Piha);
        assert_eq!(HawaiianMoon::OleKuKahiWaning.anahulu(), Anahulu::Hoemi);
        assert_eq!(HawaiianMoon::Muku.anahulu(), Anahulu::Hoemi);
    }

    #[test]
    fn test_repeated_ole_names_share_display() {
        assert_eq!(HawaiianMoon::OleKuKahi.name(), HawaiianMoon::OleKuKahiWaning.name());
        assert_ne!(HawaiianMoon::OleKuKahi, HawaiianMoon::OleKuKahiWaning);
        assert_eq!(HawaiianMoon::Mahealani.to_string(), "Māhealani");
        assert_eq!(HawaiianMoon::Mahealani.ascii_name(), "Mahealani");
    }

    #[test]
    fn test_ascii_names_are_ascii() {
        for moon in HawaiianMoon::ALL {
            assert!(moon.ascii_name().is_ascii(), "{:?}", moon);
        }
    }

    #[test]
    fn test_phase_predicates() {
        assert!(MoonPhase::WaxingGibbous.is_waxing());
        assert!(!MoonPhase::Full.is_waxing());
        assert!(!MoonPhase::Full.is_waning());
        assert!(MoonPhase::LastQuarter.is_waning());
        assert_eq!(MoonPhase::New.to_string(), "new moon");
    }

    #[test]
    fn test_lunar_day_display() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 5).unwrap();
        let day = LunarDay::new(date, 0.5, 1.0, HawaiianMoon::Mahealani, MoonPhase::Full);
        assert_eq!(day.to_string(), "2025-11-05 Māhealani");
    }
}
