/// Viewport width class, computed once at the app root from the window size
/// and shared through context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

pub const MOBILE_MAX: f64 = 768.0;
pub const TABLET_MAX: f64 = 1024.0;

impl Breakpoint {
    pub fn from_width(width: f64) -> Self {
        if !width.is_finite() || width <= 0.0 {
            // no layout yet; assume the widest layout so nothing is hidden
            return Breakpoint::Desktop;
        }
        if width < MOBILE_MAX {
            Breakpoint::Mobile
        } else if width < TABLET_MAX {
            Breakpoint::Tablet
        } else {
            Breakpoint::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == Breakpoint::Mobile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_widths() {
        assert_eq!(Breakpoint::from_width(375.0), Breakpoint::Mobile);
        assert_eq!(Breakpoint::from_width(767.9), Breakpoint::Mobile);
        assert_eq!(Breakpoint::from_width(768.0), Breakpoint::Tablet);
        assert_eq!(Breakpoint::from_width(1023.0), Breakpoint::Tablet);
        assert_eq!(Breakpoint::from_width(1440.0), Breakpoint::Desktop);
        assert_eq!(Breakpoint::from_width(0.0), Breakpoint::Desktop);
        assert_eq!(Breakpoint::from_width(f64::NAN), Breakpoint::Desktop);
    }
}
