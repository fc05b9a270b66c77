use std::str::FromStr;

use crate::error::TitleError;

/// RGB color with channels in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Standard six-sector HSV to RGB conversion.
    ///
    /// Hue of exactly 360 degrees (or more) wraps to 0. A value near zero is
    /// black regardless of hue and saturation; a saturation near zero is the
    /// gray `(v, v, v)`.
    pub fn from_hsv(hsv: Hsv) -> Self {
        let mut hue = hsv.hue;
        if hue >= 360.0 {
            hue = 0.0;
        }

        if hsv.value < f32::EPSILON {
            return Self::BLACK;
        }
        if hsv.saturation < f32::EPSILON {
            return Self::new(hsv.value, hsv.value, hsv.value);
        }

        let sector = ((hue / 60.0).floor() as i32).rem_euclid(6);
        let f = (hue / 60.0) - (hue / 60.0).floor();
        let v = hsv.value;
        let p = v * (1.0 - hsv.saturation);
        let q = v * (1.0 - f * hsv.saturation);
        let t = v * (1.0 - (1.0 - f) * hsv.saturation);

        match sector {
            0 => Self::new(v, t, p),
            1 => Self::new(q, v, p),
            2 => Self::new(p, v, t),
            3 => Self::new(p, q, v),
            4 => Self::new(t, p, v),
            _ => Self::new(v, p, q),
        }
    }
}

impl FromStr for Rgb {
    type Err = TitleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let &[r, g, b] = parts.as_slice() else {
            return Err(TitleError::parse(format!(
                "could not parse color from string: {s}"
            )));
        };
        let channel = |c: &str| {
            let v: f32 = c.parse().map_err(|_| {
                TitleError::parse(format!("could not parse color from string: {s}"))
            })?;
            if !(0.0..=1.0).contains(&v) {
                return Err(TitleError::parse(format!(
                    "color channels must be in 0..=1: {s}"
                )));
            }
            Ok(v)
        };
        Ok(Self::new(channel(r)?, channel(g)?, channel(b)?))
    }
}

/// HSV color: hue in degrees, saturation and value in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
}

impl Hsv {
    pub fn new(hue: f32, saturation: f32, value: f32) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }
}

/// Named gradient hues in degrees.
pub const GRADIENT_HUES: [(&str, f32); 10] = [
    ("red", 360.0),
    ("orange", 30.0),
    ("yellow", 60.0),
    ("green", 120.0),
    ("cyan", 180.0),
    ("azure", 210.0),
    ("blue", 240.0),
    ("violet", 270.0),
    ("magenta", 300.0),
    ("rose", 330.0),
];

// Saturation/value pairs for the two gradient endpoints.
const GRADIENT_START_SV: (f32, f32) = (1.0, 0.5);
const GRADIENT_END_SV: (f32, f32) = (0.5, 0.8);

pub fn hue_for(name: &str) -> Option<f32> {
    GRADIENT_HUES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, hue)| *hue)
}

/// The valid gradient names, sorted, joined with `", "`.
pub fn gradient_options() -> String {
    let mut names: Vec<&str> = GRADIENT_HUES.iter().map(|(n, _)| *n).collect();
    names.sort_unstable();
    names.join(", ")
}

/// Resolve a gradient name to its start and end colors.
///
/// Unknown names log a warning listing the valid options and return `None`;
/// the caller is expected to fall back to a flat fill.
pub fn resolve_gradient(name: &str) -> Option<(Rgb, Rgb)> {
    let Some(hue) = hue_for(name) else {
        tracing::warn!(gradient = %name, "could not find hue for gradient");
        tracing::warn!(options = %gradient_options(), "available options");
        return None;
    };

    let start = Rgb::from_hsv(Hsv::new(hue, GRADIENT_START_SV.0, GRADIENT_START_SV.1));
    let end = Rgb::from_hsv(Hsv::new(hue, GRADIENT_END_SV.0, GRADIENT_END_SV.1));
    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_value_is_black() {
        for hue in [0.0, 120.0, 275.0] {
            assert_eq!(Rgb::from_hsv(Hsv::new(hue, 1.0, 0.0)), Rgb::BLACK);
        }
    }

    #[test]
    fn zero_saturation_is_gray() {
        for value in [0.25, 0.5, 1.0] {
            let rgb = Rgb::from_hsv(Hsv::new(0.0, 0.0, value));
            assert_eq!(rgb, Rgb::new(value, value, value));
        }
    }

    #[test]
    fn hue_360_wraps_to_0() {
        let a = Rgb::from_hsv(Hsv::new(360.0, 1.0, 0.5));
        let b = Rgb::from_hsv(Hsv::new(0.0, 1.0, 0.5));
        assert_eq!(a, b);
        // Pure red at full saturation.
        assert_eq!(a, Rgb::new(0.5, 0.0, 0.0));
    }

    #[test]
    fn sector_assignment_covers_primaries() {
        let green = Rgb::from_hsv(Hsv::new(120.0, 1.0, 1.0));
        assert_eq!(green, Rgb::new(0.0, 1.0, 0.0));
        let blue = Rgb::from_hsv(Hsv::new(240.0, 1.0, 1.0));
        assert_eq!(blue, Rgb::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn all_ten_gradient_names_resolve() {
        for (name, _) in GRADIENT_HUES {
            assert!(resolve_gradient(name).is_some(), "{name} did not resolve");
        }
    }

    #[test]
    fn unknown_gradient_name_is_none() {
        assert!(resolve_gradient("mauve").is_none());
        assert!(resolve_gradient("").is_none());
    }

    #[test]
    fn options_list_all_names_sorted() {
        let options = gradient_options();
        assert_eq!(
            options,
            "azure, blue, cyan, green, magenta, orange, red, rose, violet, yellow"
        );
    }

    #[test]
    fn rgb_from_str() {
        assert_eq!("0.2, 0.3, 0.4".parse::<Rgb>().unwrap(), Rgb::new(0.2, 0.3, 0.4));
        assert_eq!("1,1,1".parse::<Rgb>().unwrap(), Rgb::WHITE);
        assert!("1,1".parse::<Rgb>().is_err());
        assert!("a,b,c".parse::<Rgb>().is_err());
    }

    #[test]
    fn rgb_from_str_rejects_out_of_range_channels() {
        assert!("2,0,0".parse::<Rgb>().is_err());
        assert!("0,-0.1,0".parse::<Rgb>().is_err());
        assert!("0,0,1.5".parse::<Rgb>().is_err());
        assert!("0,0,1".parse::<Rgb>().is_ok());
        assert!("0,0,0".parse::<Rgb>().is_ok());
    }
}
